//! Assistant overlay: transcript, typing indicator and prompt input.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::domain::{
    chat::{ChatMessage, ChatRole},
    chat_session::ChatSession,
    input_state::InputBuffer,
};

use super::styles;

const PANEL_TITLE: &str = " Gebzem AI Asistan ";
const PANEL_SUBTITLE: &str = "Gebze hakkında her şeyi sor!";
const EMPTY_TRANSCRIPT_TEXT: &str = "Sana nasıl yardımcı olabilirim?";
const EMPTY_TRANSCRIPT_HINT: &str =
    "\"En iyi İskender nerede yenir?\" veya \"Eskihisar'da ne yapılır?\" gibi sorular sorabilirsin.";
const TYPING_TEXT: &str = "Yazıyor...";
const PLACEHOLDER_TEXT: &str = "Mesajını yaz...";
const PROMPT_SYMBOL: &str = "> ";

/// Bubbles take at most this share of the transcript width.
const BUBBLE_WIDTH_PERCENT: usize = 80;

pub fn render_chat_panel(frame: &mut Frame<'_>, area: Rect, chat: &ChatSession) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(PANEL_TITLE)
        .borders(Borders::ALL)
        .border_style(styles::assistant_border_style());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [subtitle_area, transcript_area, input_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .areas(inner);

    frame.render_widget(
        Paragraph::new(Span::styled(PANEL_SUBTITLE, styles::muted_style())),
        subtitle_area,
    );

    let lines = transcript_lines(chat, transcript_area.width as usize);
    let overflow = lines.len().saturating_sub(transcript_area.height as usize);
    let visible: Vec<Line<'static>> = lines.into_iter().skip(overflow).collect();
    frame.render_widget(Paragraph::new(visible), transcript_area);

    render_input(frame, input_area, chat.input());
}

/// Transcript as display lines, oldest first; the last lines are the newest.
fn transcript_lines(chat: &ChatSession, width: usize) -> Vec<Line<'static>> {
    let transcript = chat.transcript();

    if transcript.is_empty() && !chat.is_awaiting_reply() {
        let mut lines = vec![Line::from(Span::styled(
            EMPTY_TRANSCRIPT_TEXT,
            styles::section_title_style(),
        ))
        .alignment(Alignment::Center)];
        lines.extend(
            wrap_text(EMPTY_TRANSCRIPT_HINT, width).into_iter().map(|line| {
                Line::from(Span::styled(line, styles::muted_style())).alignment(Alignment::Center)
            }),
        );
        return lines;
    }

    let bubble_width = (width * BUBBLE_WIDTH_PERCENT / 100).max(1);
    let mut lines = Vec::new();
    for message in transcript.messages() {
        lines.extend(bubble_lines(message, bubble_width));
        lines.push(Line::default());
    }

    if chat.is_awaiting_reply() {
        lines.push(Line::from(Span::styled(
            TYPING_TEXT,
            styles::typing_indicator_style(),
        )));
    }

    lines
}

fn bubble_lines(message: &ChatMessage, width: usize) -> Vec<Line<'static>> {
    let (style, alignment) = match message.role() {
        ChatRole::User => (styles::user_bubble_style(), Alignment::Right),
        ChatRole::Assistant => (styles::assistant_bubble_style(), Alignment::Left),
    };

    wrap_text(message.text(), width)
        .into_iter()
        .map(|line| Line::from(Span::styled(line, style)).alignment(alignment))
        .collect()
}

/// Greedy word wrap by display width. Words wider than `width` are split.
pub(crate) fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        let mut current = String::new();
        let mut current_width = 0;

        for word in paragraph.split_whitespace() {
            let word_width = word.width();
            let gap = usize::from(!current.is_empty());

            if current_width + gap + word_width <= width {
                if gap == 1 {
                    current.push(' ');
                }
                current.push_str(word);
                current_width += gap + word_width;
                continue;
            }

            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }

            for ch in word.chars() {
                let ch_width = ch.width().unwrap_or(0);
                if current_width + ch_width > width && !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                    current_width = 0;
                }
                current.push(ch);
                current_width += ch_width;
            }
        }

        lines.push(current);
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

fn render_input(frame: &mut Frame<'_>, area: Rect, input: &InputBuffer) {
    let paragraph = Paragraph::new(build_input_line(input)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(styles::panel_border_style()),
    );
    frame.render_widget(paragraph, area);

    let cursor_x = area
        .x
        .saturating_add(1)
        .saturating_add(PROMPT_SYMBOL.width() as u16)
        .saturating_add(cursor_column(input).min(u16::MAX as usize) as u16);
    frame.set_cursor_position((cursor_x, area.y.saturating_add(1)));
}

fn build_input_line(input: &InputBuffer) -> Line<'static> {
    let prompt = Span::styled(PROMPT_SYMBOL, styles::key_hint_style());

    if input.is_empty() {
        Line::from(vec![
            prompt,
            Span::styled(PLACEHOLDER_TEXT, styles::input_placeholder_style()),
        ])
    } else {
        Line::from(vec![
            prompt,
            Span::styled(input.text().to_owned(), styles::input_text_style()),
        ])
    }
}

/// Display column of the cursor within the input text.
fn cursor_column(input: &InputBuffer) -> usize {
    input
        .text()
        .chars()
        .take(input.cursor())
        .map(|ch| ch.width().unwrap_or(0))
        .sum()
}
