use bevy_ecs::prelude::*;

/// A character tile was clicked on the menu.
#[derive(Event, Debug, Clone, Copy)]
pub struct CharacterSelectedEvent {
    /// 0-based tile index, row-major.
    pub index: usize,
}

/// The footer credit was clicked.
#[derive(Event, Debug, Clone)]
pub struct OpenLinkEvent {
    pub url: String,
}
