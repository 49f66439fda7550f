use crate::domain::module::ModuleKind;
use crate::domain::state::LayoutState;

use super::class_token;

const TEXT_PLACEHOLDER: &str = "       <p>Lorem ipsum...</p>";
const IMAGE_PLACEHOLDER: &str =
    r#"       <img src="https://via.placeholder.com/150" alt="placeholder">"#;

/// Renders an HTML document with one `div` per module in desktop order.
///
/// Each element carries `module module-{n} type-{kind}` plus `group-{tag}` for
/// grouped modules, where `n` is the module's 1-based desktop position.
pub fn render_markup(state: &LayoutState) -> String {
    let orders = state.orders();
    let mut body = Vec::new();

    for (index, &id) in orders.desktop().iter().enumerate() {
        let Some(module) = state.module(id) else {
            continue;
        };
        let group_class = module
            .group_id()
            .map(|g| format!(" group-{}", class_token(g)))
            .unwrap_or_default();
        let content = match module.kind() {
            ModuleKind::Box => "       ",
            ModuleKind::Text => TEXT_PLACEHOLDER,
            ModuleKind::Image => IMAGE_PLACEHOLDER,
        };
        body.push(format!(
            "    <div class=\"module module-{} type-{}{}\">\n{}\n    </div>",
            index + 1,
            module.kind().as_str(),
            group_class,
            content
        ));
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <link rel="stylesheet" href="style.css">
</head>
<body>
  <div class="grid-container">
{}
  </div>
</body>
</html>"#,
        body.join("\n")
    )
}
