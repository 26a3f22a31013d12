use super::messages::Message;
use super::state::{App, PAGES_SCROLL_ID};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::text::Wrapping;
use iced::widget::{
    Column, button, column, container, horizontal_space, row, scrollable, slider, text,
    text_input, vertical_space,
};
use iced::{Element, Length};
use preview_core::zoom::{MAX_SCALE, MIN_SCALE};
use preview_core::{LoadStatus, PreviewSnapshot};

/// Inner margin of a page, relative to its width.
const PAGE_MARGIN_RATIO: f32 = 0.06;
const ZOOM_SLIDER_WIDTH: f32 = 120.0;

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let snapshot = self.session.snapshot();
        let toolbar = self.toolbar(&snapshot);

        let body: Element<'_, Message> = match snapshot.status {
            LoadStatus::Closed => centered(
                column![
                    text("Preview closed."),
                    button("Open preview").on_press(Message::OpenPreview),
                ]
                .spacing(12)
                .align_x(Horizontal::Center),
            ),
            LoadStatus::Loading => centered(text("Loading preview…")),
            LoadStatus::Failed => centered(
                column![
                    text(format!(
                        "Could not load the document: {}",
                        snapshot.error.as_deref().unwrap_or("unknown error")
                    )),
                    button("Retry").on_press(Message::OpenPreview),
                ]
                .spacing(12)
                .align_x(Horizontal::Center),
            ),
            LoadStatus::Ready => self.page_column(),
        };

        column![toolbar, body]
            .padding(8)
            .spacing(8)
            .height(Length::Fill)
            .into()
    }

    fn toolbar(&self, snapshot: &PreviewSnapshot) -> Element<'_, Message> {
        let ready = snapshot.status == LoadStatus::Ready;

        let prev_button = if ready && snapshot.current_page > 1 {
            button("Previous").on_press(Message::PreviousPage)
        } else {
            button("Previous")
        };
        let next_button = if ready && snapshot.current_page < snapshot.visible_page_limit {
            button("Next").on_press(Message::NextPage)
        } else {
            button("Next")
        };

        let mut page_input =
            text_input("Page", &snapshot.pending_page_input).width(Length::Fixed(64.0));
        if ready {
            page_input = page_input
                .on_input(Message::PageInputChanged)
                .on_submit(Message::PageInputSubmitted);
        }

        let zoom_out = if ready {
            button("−").on_press(Message::ZoomOut)
        } else {
            button("−")
        };
        let zoom_in = if ready {
            button("+").on_press(Message::ZoomIn)
        } else {
            button("+")
        };
        // Sliders have no disabled state; hide it until pages are shown.
        let zoom_slider: Element<'_, Message> = if ready {
            slider(MIN_SCALE..=MAX_SCALE, snapshot.scale, Message::ZoomChanged)
                .step(0.05)
                .width(Length::Fixed(ZOOM_SLIDER_WIDTH))
                .into()
        } else {
            horizontal_space()
                .width(Length::Fixed(ZOOM_SLIDER_WIDTH))
                .into()
        };
        let zoom_reset = if ready {
            button("Reset").on_press(Message::ResetZoom)
        } else {
            button("Reset")
        };

        let open_toggle = if snapshot.is_open {
            button("Close preview").on_press(Message::ClosePreview)
        } else {
            button("Open preview").on_press(Message::OpenPreview)
        };

        let mut controls = row![
            prev_button,
            page_input,
            text(format!("/ {}", snapshot.visible_page_limit)),
            next_button,
            zoom_out,
            text(format!("{:.0}%", snapshot.scale * 100.0)),
            zoom_in,
            zoom_slider,
            zoom_reset,
            text(format!("{}% read", snapshot.scroll_progress_percent)),
            horizontal_space(),
        ]
        .spacing(8)
        .align_y(Vertical::Center);

        if snapshot.is_limited_preview {
            let total = snapshot.total_page_count.unwrap_or(snapshot.visible_page_limit);
            controls = controls.push(text(format!(
                "Preview limited to {} of {} pages",
                snapshot.visible_page_limit, total
            )));
        }

        controls.push(open_toggle).into()
    }

    fn page_column(&self) -> Element<'_, Message> {
        let layout = self.session.layout();
        let page_width = self.session.page_width();
        let page_height = layout.page_height(page_width);
        let font_size = self.page_font_size();

        let pages = self.pages.iter().enumerate().map(|(idx, body)| {
            let content = column![
                text(body.as_str())
                    .size(font_size)
                    .width(Length::Fill)
                    .wrapping(Wrapping::WordOrGlyph),
                vertical_space(),
                text(format!("{}", idx + 1)).size(font_size * 0.8),
            ]
            .align_x(Horizontal::Center)
            .height(Length::Fill);

            container(content)
                .width(Length::Fixed(page_width))
                .height(Length::Fixed(page_height))
                .padding(page_width * PAGE_MARGIN_RATIO)
                .clip(true)
                .style(container::bordered_box)
                .into()
        });

        let page_stack = Column::with_children(pages)
            .spacing(layout.gap_px)
            .padding(layout.padding_px)
            .width(Length::Fill)
            .align_x(Horizontal::Center);

        scrollable(page_stack)
            .on_scroll(|viewport| Message::Scrolled {
                scroll_top: viewport.absolute_offset().y,
                client_height: viewport.bounds().height,
                scroll_height: viewport.content_bounds().height,
            })
            .id(PAGES_SCROLL_ID.clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

fn centered<'a>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    container(content)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}
