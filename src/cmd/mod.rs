pub mod inspect;
pub mod shade;
