//! Footer key hints, built from the live keybindings.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::config::{KeyContext, KeybindingConfig};
use crate::ui::action::Action;

use super::theme::{FOOTER_BG, KEY_HINT_BG, TEXT_MUTED, TEXT_SECONDARY};

#[derive(Debug, Clone, Copy)]
pub struct KeyHintBarStyle {
    pub key_style: Style,
    pub action_style: Style,
    pub item_gap: &'static str,
    pub alignment: Alignment,
    pub background: Option<Color>,
}

impl KeyHintBarStyle {
    pub fn footer_bar() -> Self {
        Self {
            key_style: Style::default().fg(TEXT_SECONDARY).bg(KEY_HINT_BG),
            action_style: Style::default().fg(TEXT_MUTED),
            item_gap: "   ",
            alignment: Alignment::Left,
            background: Some(FOOTER_BG),
        }
    }
}

/// Actions worth a hint in each context, in display order
fn hinted_actions(context: KeyContext) -> &'static [Action] {
    match context {
        KeyContext::Grid | KeyContext::Global => &[
            Action::OpenSelected,
            Action::FocusSearch,
            Action::NextCategory,
            Action::NextFilter,
            Action::Reset,
            Action::Quit,
        ],
        KeyContext::Search => &[Action::ExitSearch, Action::ClearSearch, Action::Quit],
        KeyContext::Lightbox => &[
            Action::PrevImage,
            Action::NextImage,
            Action::CloseLightbox,
        ],
    }
}

/// (key, label) pairs for the footer. Actions without a binding are skipped.
pub fn hints_for(keys: &KeybindingConfig, context: KeyContext) -> Vec<(String, &'static str)> {
    hinted_actions(context)
        .iter()
        .filter_map(|action| {
            keys.key_for(action, context)
                .map(|key| (key.to_string(), action.label()))
        })
        .collect()
}

pub fn render_key_hints(
    area: Rect,
    buf: &mut Buffer,
    hints: &[(String, &str)],
    style: KeyHintBarStyle,
) {
    let mut spans = vec![Span::raw(" ")];

    for (i, (key, action)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(style.item_gap));
        }
        spans.push(Span::styled(format!(" {} ", key), style.key_style));
        spans.push(Span::styled(format!(" {}", action), style.action_style));
    }

    let mut paragraph = Paragraph::new(Line::from(spans)).alignment(style.alignment);
    if let Some(bg) = style.background {
        paragraph = paragraph.style(Style::default().bg(bg));
    }

    paragraph.render(area, buf);
}
