use ratatui::layout::{Flex, Layout, Rect, Size};

/// Return a rectangle of size `size` centered within `area`.  If `area` is
/// too small in either dimension, the result is clipped to it.
pub(crate) fn center_rect(area: Rect, size: Size) -> Rect {
    let [area] = Layout::horizontal([size.width])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::vertical([size.height])
        .flex(Flex::Center)
        .areas(area);
    area
}
