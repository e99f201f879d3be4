pub mod backdrop_view;
pub mod bar_button;
pub mod circle_button;
pub mod geom;
pub mod view;

pub use backdrop_view::BackdropView;
pub use bar_button::BarButton;
pub use circle_button::CircleButton;
pub use geom::Rect;
pub use view::{flush_queue, RenderQueue, UiContext, View};
