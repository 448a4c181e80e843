use bevy::prelude::*;

/// Top-level System Sets that define the main execution phases
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum AppSystemSet {
    Input,
    Logic,
    Events,
    Render,
}

/// Input System Sets: the pointer tracker runs before anything that reads
/// hover state
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum InputSystemSet {
    Pointer,
    Mouse,
    Keyboard,
}

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum LogicSystemSet {
    Magnify,
    Tooltip,
}

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum EventSystemSet {
    Activation,
    Reload,
}

/// Layout must finish before visuals read the sizes it settled on
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum RenderSystemSet {
    Layout,
    Visuals,
}
