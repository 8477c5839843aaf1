use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::{
    domain::{
        catalog::{Business, Category, CityEvent},
        navigation::Screen,
        shell_state::ShellState,
    },
    usecases::browse,
};

use super::{chat_panel::render_chat_panel, styles};

const BRAND: &str = "Gebzem";
const WELCOME_TEXT: &str = "Hoş geldin, Gebzeli!";
const WELCOME_SUBTITLE: &str = "Şehrin en iyi mekanlarını ve etkinliklerini keşfet.";
const EVENTS_TITLE: &str = " Yaklaşan Etkinlikler ";
const CATEGORIES_TITLE: &str = " Kategoriler ";
const PROMOTED_TITLE: &str = " Senin İçin Seçtiklerimiz ";
const EMPTY_CATEGORY_TEXT: &str = "Bu kategoride henüz işletme bulunmuyor.";
const BUSINESS_NOT_FOUND_TEXT: &str = "İşletme bulunamadı.";
const LOCATION_TITLE: &str = "Konum";
const DETAIL_ACTIONS: &str = "d: Yol Tarifi Al | c: Ara";

pub fn render(frame: &mut Frame<'_>, state: &ShellState) {
    let [header_area, content_area, status_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());

    frame.render_widget(
        Paragraph::new(Span::styled(BRAND, styles::brand_style())),
        header_area,
    );

    match state.navigation().screen() {
        Screen::Home => render_home(frame, content_area, state),
        Screen::Category => render_category(frame, content_area, state),
        Screen::Details => render_details(frame, content_area, state),
    }

    if state.is_assistant_open() {
        render_chat_panel(frame, assistant_area(content_area), state.chat());
    }

    frame.render_widget(Paragraph::new(status_line(state)), status_area);
}

/// Right-hand overlay for the assistant, full width on narrow terminals.
fn assistant_area(content: Rect) -> Rect {
    if content.width < 60 {
        return content;
    }
    let [_, panel] = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .areas(content);
    panel
}

fn render_home(frame: &mut Frame<'_>, area: Rect, state: &ShellState) {
    let catalog = state.catalog();
    let events_height = (catalog.events().len() as u16).saturating_mul(2).saturating_add(2);

    let [welcome_area, events_area, categories_area, promoted_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(events_height),
            Constraint::Length(3),
            Constraint::Min(3),
        ])
        .areas(area);

    let welcome = vec![
        Line::from(Span::styled(WELCOME_TEXT, styles::section_title_style())),
        Line::from(Span::styled(WELCOME_SUBTITLE, styles::muted_style())),
    ];
    frame.render_widget(Paragraph::new(welcome), welcome_area);

    let events: Vec<ListItem<'static>> = catalog.events().iter().map(event_item).collect();
    frame.render_widget(List::new(events).block(section_block(EVENTS_TITLE)), events_area);

    frame.render_widget(
        Paragraph::new(category_grid_line()).block(section_block(CATEGORIES_TITLE)),
        categories_area,
    );

    render_business_list(
        frame,
        promoted_area,
        PROMOTED_TITLE.to_owned(),
        &browse::visible_businesses(state),
        state.navigation().list_selection(),
    );
}

fn render_category(frame: &mut Frame<'_>, area: Rect, state: &ShellState) {
    let title = format!(
        " {} ",
        browse::category_title(state.navigation().selected_category())
    );
    let businesses = browse::visible_businesses(state);

    if businesses.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(EMPTY_CATEGORY_TEXT, styles::muted_style()))
                .block(section_block(&title)),
            area,
        );
        return;
    }

    render_business_list(
        frame,
        area,
        title,
        &businesses,
        state.navigation().list_selection(),
    );
}

fn render_business_list(
    frame: &mut Frame<'_>,
    area: Rect,
    title: String,
    businesses: &[&Business],
    selection: usize,
) {
    let items: Vec<ListItem<'static>> = businesses
        .iter()
        .map(|business| ListItem::new(business_lines(business)))
        .collect();

    let list = List::new(items)
        .block(section_block(&title))
        .highlight_style(styles::highlight_style());

    let mut list_state = ListState::default();
    list_state.select((!businesses.is_empty()).then_some(selection));
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn render_details(frame: &mut Frame<'_>, area: Rect, state: &ShellState) {
    let Some(business) = browse::opened_business(state) else {
        frame.render_widget(
            Paragraph::new(Span::styled(BUSINESS_NOT_FOUND_TEXT, styles::muted_style()))
                .block(section_block(" Detay ")),
            area,
        );
        return;
    };

    let title = format!(" {} ", business.name);
    frame.render_widget(
        Paragraph::new(detail_lines(business))
            .wrap(Wrap { trim: false })
            .block(section_block(&title)),
        area,
    );
}

fn section_block(title: &str) -> Block<'static> {
    Block::default()
        .title(Span::styled(title.to_owned(), styles::section_title_style()))
        .borders(Borders::ALL)
        .border_style(styles::panel_border_style())
}

fn category_grid_line() -> Line<'static> {
    let mut spans = Vec::new();
    for (index, category) in Category::ALL.iter().enumerate() {
        if index > 0 {
            spans.push(Span::raw("   "));
        }
        spans.push(Span::styled(
            format!("[{}]", index + 1),
            styles::key_hint_style(),
        ));
        spans.push(Span::raw(format!(" {}", category.label())));
    }
    Line::from(spans)
}

fn event_item(event: &CityEvent) -> ListItem<'static> {
    ListItem::new(vec![
        Line::from(vec![
            Span::styled(event.title.clone(), styles::business_name_style()),
            Span::raw("  "),
            Span::styled(event.category.clone(), styles::event_category_style()),
        ]),
        Line::from(Span::styled(
            format!("{} · {}", event.date, event.location),
            styles::muted_style(),
        )),
    ])
}

fn business_lines(business: &Business) -> Vec<Line<'static>> {
    let mut header = vec![Span::styled(
        business.name.clone(),
        styles::business_name_style(),
    )];
    if business.is_promoted {
        header.push(Span::raw(" "));
        header.push(Span::styled(" ÖNE ÇIKAN ", styles::promoted_badge_style()));
    }

    vec![
        Line::from(header),
        Line::from(vec![
            Span::styled(rating_label(business), styles::rating_style()),
            Span::styled(
                format!("  {}", business.category.label()),
                styles::muted_style(),
            ),
        ]),
        Line::from(Span::styled(business.address.clone(), styles::muted_style())),
    ]
}

fn rating_label(business: &Business) -> String {
    format!("★ {:.1} ({})", business.rating, business.review_count)
}

fn detail_lines(business: &Business) -> Vec<Line<'static>> {
    vec![
        Line::from(vec![
            Span::styled(rating_label(business), styles::rating_style()),
            Span::styled(
                format!("  {}", business.category.label()),
                styles::muted_style(),
            ),
        ]),
        Line::default(),
        Line::from(business.description.clone()),
        Line::default(),
        Line::from(Span::styled(LOCATION_TITLE, styles::section_title_style())),
        Line::from(business.address.clone()),
        Line::default(),
        Line::from(vec![
            Span::styled("Çalışma Saatleri: ", styles::muted_style()),
            Span::raw(business.working_hours.clone()),
        ]),
        Line::from(vec![
            Span::styled("Telefon: ", styles::muted_style()),
            Span::raw(business.phone.clone()),
        ]),
        Line::from(vec![
            Span::styled("Görsel: ", styles::muted_style()),
            Span::styled(business.image_url.clone(), styles::muted_style()),
        ]),
        Line::default(),
        Line::from(Span::styled(DETAIL_ACTIONS, styles::key_hint_style())),
    ]
}

fn status_line(state: &ShellState) -> String {
    if state.is_assistant_open() {
        let pending = if state.chat().is_awaiting_reply() {
            " | cevap bekleniyor"
        } else {
            ""
        };
        return format!("enter: gönder | esc: kapat | ctrl+c: çıkış{pending}");
    }

    match state.navigation().screen() {
        Screen::Home => "1-4: kategori | j/k: seç | enter: aç | a: asistan | q: çıkış".to_owned(),
        Screen::Category => {
            "j/k: seç | enter: aç | esc: geri | g: ana sayfa | a: asistan | q: çıkış".to_owned()
        }
        Screen::Details => {
            "d: yol tarifi | c: ara | esc: geri | g: ana sayfa | a: asistan | q: çıkış".to_owned()
        }
    }
}
