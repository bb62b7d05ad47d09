use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let (header, body, footer) = layout_regions(frame.area());

    frame.render_widget(Header::widget(app), header);

    let offset = u16::try_from(app.scroll().offset).unwrap_or(u16::MAX);
    let page = Paragraph::new(app.lines().to_vec()).scroll((offset, 0));
    frame.render_widget(page, body);

    frame.render_widget(Footer::widget(app, footer), footer);
}
