//! datastage logo component
//!
//! ASCII banner with a blue-to-cyan gradient, shown at the top of the
//! dashboard.

use iocraft::prelude::*;

// Static logo lines with individual colors for gradient effect
pub const DATASTAGE_LOGO_LINES: &[&str] = &[
    "▗▄▄▄  ▄▄▄ ▗▄▄▄▖▗▄▖  ▗▄▄▖▗▄▄▄▖▗▄▖  ▗▄▄▖▗▄▄▄▖",
    "▐▌  █ █  █  █ ▐▌ ▐▌▐▌     █ ▐▌ ▐▌▐▌   ▐▌   ",
    "▐▌  █ █▀▀█  █ ▐▛▀▜▌ ▝▀▚▖  █ ▐▛▀▜▌▐▌▝▜▌▐▛▀▀▘",
    "▐▙▄▄▀ █  █  █ ▐▌ ▐▌▗▄▄▞▘  █ ▐▌ ▐▌▝▚▄▞▘▐▙▄▄▖",
];

// Color gradient from deep blue to cyan
pub const LOGO_COLORS: &[(u8, u8, u8)] = &[
    (59, 130, 246),  // Blue
    (45, 160, 240),  // Blue-cyan
    (34, 190, 230),  // Light cyan
    (34, 211, 238),  // Cyan
];

/// datastage ASCII banner with gradient colors
#[component]
pub fn DatastageLogo(_hooks: Hooks) -> impl Into<AnyElement<'static>> {
    element! {
        View(key: "logo-content", flex_direction: FlexDirection::Column) {
            #(DATASTAGE_LOGO_LINES.iter().enumerate().map(|(i, line)| {
                let color = LOGO_COLORS.get(i).unwrap_or(&(34, 211, 238));
                element! {
                    Text(
                        content: *line,
                        color: Color::Rgb { r: color.0, g: color.1, b: color.2 },
                        weight: Weight::Bold,
                    )
                }
            }).collect::<Vec<_>>())
        }
    }
}
