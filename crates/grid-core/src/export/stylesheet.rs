use crate::domain::config::ResponsiveMode;
use crate::domain::module::{Module, ModuleKind};
use crate::domain::span::{desktop_span, mobile_span};
use crate::domain::state::LayoutState;

/// Viewport width below which the mobile rules apply.
const MOBILE_BREAKPOINT_PX: u32 = 768;

const TYPE_RULES: &str = r#".module.type-image {
  background: #e0e0e0;
}
.module.type-image img {
  width: 100%;
  height: 100%;
  object-fit: cover;
  display: block;
}
.module.type-text {
  background: #ffffff;
  padding: 10px;
}"#;

/// Renders the stylesheet matching [`render_markup`](super::render_markup).
///
/// Desktop rules come first, one per desktop position.  A media query then
/// switches the grid to the mobile column count and, in reflow mode, gives
/// every module its mobile span and mobile `order`.
pub fn render_stylesheet(state: &LayoutState) -> String {
    let config = state.config();
    let orders = state.orders();

    let mut css = format!(
        "body {{\n  margin: 0;\n  background: whitesmoke;\n  padding: {gap}px;\n}}\n\n\
         .grid-container {{\n  display: grid;\n  grid-template-columns: repeat({cols}, 1fr);\n  gap: {gap}px;\n}}\n\n\
         .module {{\n  min-height: 60px;\n}}\n\n{TYPE_RULES}\n\n",
        gap = config.desktop_gap(),
        cols = config.desktop_columns(),
    );

    let desktop_rules: Vec<String> = orders
        .desktop()
        .iter()
        .enumerate()
        .filter_map(|(index, &id)| {
            let module = state.module(id)?;
            Some(desktop_rule(index + 1, module, config.desktop_columns()))
        })
        .collect();
    css.push_str(&desktop_rules.join("\n\n"));

    css.push_str(&format!(
        "\n\n/* Mobile responsive - {mode} */\n@media (max-width: {bp}px) {{\n  body {{ padding: {gap}px; }}\n  \
         .grid-container {{\n    grid-template-columns: repeat({cols}, 1fr);\n    gap: {gap}px;\n  }}\n\n",
        mode = config.responsive_mode(),
        bp = MOBILE_BREAKPOINT_PX,
        gap = config.mobile_gap(),
        cols = config.target_columns(),
    ));

    if config.responsive_mode() == ResponsiveMode::Reflow {
        let mobile_rules: Vec<String> = orders
            .mobile()
            .iter()
            .enumerate()
            .filter_map(|(order, &id)| {
                let module = state.module(id)?;
                let class_index = orders.desktop_position(id)?;
                let span = mobile_span(module, config.desktop_columns(), config.target_columns());
                let comment = match module.mobile_col() {
                    Some(_) => " /* manual */".to_string(),
                    None => format!(
                        " /* auto: {}/{} × {} = {} */",
                        module.col(),
                        config.desktop_columns(),
                        config.target_columns(),
                        span
                    ),
                };
                Some(format!(
                    "  .module-{class_index} {{\n    grid-column: span {span};{comment}\n    grid-row: span {row};\n    order: {order};\n  }}",
                    row = module.row(),
                ))
            })
            .collect();
        css.push_str(&mobile_rules.join("\n\n"));
    }

    css.push_str("\n}");
    css
}

fn desktop_rule(class_index: usize, module: &Module, desktop_columns: u32) -> String {
    let appearance = module.appearance();
    let background = if module.kind() == ModuleKind::Box {
        let color = if appearance.transparent {
            "transparent"
        } else {
            appearance.color.as_str()
        };
        format!("\n  background: {color};")
    } else {
        String::new()
    };
    let outline = if appearance.border_width > 0 {
        format!(
            "\n  outline: {w}px solid {c};\n  outline-offset: -{w}px;",
            w = appearance.border_width,
            c = appearance.border_color
        )
    } else {
        String::new()
    };

    format!(
        ".module-{class_index} {{\n  grid-column: span {span};\n  grid-row: span {row};{background}{outline}\n}}",
        span = desktop_span(module, desktop_columns),
        row = module.row(),
    )
}
