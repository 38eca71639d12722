//! Movement domain: messages emitted by the jump state machine.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::movement::JumpKind;

/// Written whenever a jump impulse is applied to a character.
#[derive(Debug)]
pub struct JumpEvent {
    pub entity: Entity,
    pub kind: JumpKind,
}

impl Message for JumpEvent {}
