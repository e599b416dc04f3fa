pub mod encode;
pub mod figure;
pub mod font;
pub mod palette;
pub mod title;

pub use encode::{encode_png, save_png};
pub use figure::{build_figure, Figure, FigureLayout, Rect};
pub use palette::{Colormap, Normalize};
pub use title::format_title;
