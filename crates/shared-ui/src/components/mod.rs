pub mod alert;
pub mod badge;
pub mod button;
pub mod card;
pub mod form_field;
pub mod skeleton;
pub mod stat_card;

pub use alert::*;
pub use badge::*;
pub use button::*;
pub use card::*;
pub use form_field::*;
pub use skeleton::*;
pub use stat_card::*;
