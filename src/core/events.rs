//! Core domain: messages for session flow.

use bevy::ecs::message::Message;

/// Request to tear down the running level and start a fresh session.
///
/// The level index is reduced modulo the level count when the session is
/// initialised, so callers may pass `level + 1` without wrapping it first.
#[derive(Debug, Clone, Copy)]
pub struct RestartSession {
    pub level: usize,
}

impl Message for RestartSession {}

/// Fired when the hero passes the door of the last level
#[derive(Debug)]
pub struct SessionVictoryEvent {
    pub coins_collected: u32,
}

impl Message for SessionVictoryEvent {}
