/// Something that happened: a key press, a resize, new content.
pub trait Intent: Send + 'static {}
