//! Research topic input component

use iocraft::prelude::*;

const ACCENT: Color = Color::Rgb {
    r: 100,
    g: 149,
    b: 237,
};

#[derive(Clone, Default, Props)]
pub struct TopicInputProps {
    /// Current input buffer
    pub value: String,
    /// Input is ignored while a mission is running
    pub disabled: bool,
}

/// Single-line topic input with a placeholder and a block cursor
#[component]
pub fn TopicInput(_hooks: Hooks, props: &TopicInputProps) -> impl Into<AnyElement<'static>> {
    let value = props.value.clone();
    let disabled = props.disabled;

    element! {
        View(
            border_style: BorderStyle::Round,
            border_color: if disabled { Color::DarkGrey } else { ACCENT },
            padding_left: 1,
            padding_right: 1,
        ) {
            View(
                flex_direction: FlexDirection::Row,
                align_items: AlignItems::Center,
            ) {
                Text(
                    content: "> ",
                    color: if disabled { Color::DarkGrey } else { ACCENT },
                )
                #(if value.is_empty() {
                    Some(element! {
                        Text(
                            content: "Type a research topic (e.g. specialty coffee market in Brazil)",
                            color: Color::DarkGrey,
                        )
                    })
                } else {
                    Some(element! {
                        Text(
                            content: value.clone(),
                            color: if disabled { Color::DarkGrey } else { Color::White },
                        )
                    })
                })
                #(if disabled {
                    None
                } else {
                    Some(element! {
                        Text(content: "▌", color: ACCENT)
                    })
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn props_default_is_enabled_and_empty() {
        let props = TopicInputProps::default();
        assert!(props.value.is_empty());
        assert!(!props.disabled);
    }
}
