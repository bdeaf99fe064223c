// Application layer: the concrete demo routines behind the menu.

pub mod demos;
