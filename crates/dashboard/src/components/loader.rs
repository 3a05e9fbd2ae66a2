/// Number of dots in the spinner
const SPINNER_DOTS: usize = 12;

/// Spinner shown while a fetch is outstanding
pub fn render_loader() -> String {
    let dots: String = (1..=SPINNER_DOTS)
        .map(|i| format!("\n    <div class=\"sk-circle{} sk-child\"></div>", i))
        .collect();
    format!("\n<div class=\"sk-circle\">{}\n</div>", dots)
}
