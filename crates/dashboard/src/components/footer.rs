pub fn render_footer() -> String {
    r#"
<footer class="container">
    <p>&copy; Mission Mars. Data courtesy of <a href="https://api.nasa.gov" rel="noopener" target="_blank">NASA Open APIs</a></p>
</footer>"#
        .to_string()
}
