/// Everything a view needs to draw itself. Cloned, compared, never
/// mutated in place.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
