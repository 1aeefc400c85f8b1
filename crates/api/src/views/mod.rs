pub mod wallpost;
