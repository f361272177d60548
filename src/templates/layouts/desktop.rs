use maud::{html, Markup, PreEscaped, DOCTYPE};

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; color: #1f2937; }
header { display: flex; align-items: center; justify-content: space-between; padding: 0.75rem 1.5rem; box-shadow: 0 1px 3px rgba(0,0,0,.1); }
header nav ul { display: flex; gap: 1rem; list-style: none; margin: 0; padding: 0; }
main.container { max-width: 1100px; margin: 1.5rem auto; padding: 0 1rem; }
.metrics { display: grid; grid-template-columns: repeat(4, 1fr); gap: 1rem; }
.metric { padding: 1rem; border: 1px solid #e5e7eb; border-radius: 8px; }
.metric .value { font-size: 1.8rem; font-weight: 600; }
.card { border: 1px solid #e5e7eb; border-radius: 8px; padding: 1rem; margin-top: 1.5rem; }
.notice { padding: 0.5rem 1rem; border-radius: 6px; background: #eff6ff; }
.notice.warning { background: #fef3c7; }
table { width: 100%; border-collapse: collapse; }
th, td { padding: 8px; text-align: left; border-bottom: 1px solid #f3f4f6; }
th { border-bottom: 2px solid #e5e7eb; }
.badge { padding: 2px 8px; border-radius: 999px; font-size: 0.85em; background: #e5e7eb; }
.badge-boarding { background: #dbeafe; }
.badge-delayed { background: #fef3c7; }
.badge-in-flight { background: #e0e7ff; }
.badge-landed { background: #d1fae5; }
.badge-cancelled { background: #fee2e2; }
"#;

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " · Flight Management" }
                style { (PreEscaped(STYLE)) }
            }
            body {
                header {
                    h3 { "✈️ Flight Management Dashboard" }
                    nav {
                        ul {
                            li { a href="/" { "Overview" } }
                            li { a href="/flights" { "Flights" } }
                            li { a href="/flights/export.xlsx" { "Export" } }
                        }
                    }
                }
                (content)
            }
        }
    }
}
