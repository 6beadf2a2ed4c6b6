use eframe::egui::{InputState, Key};
use hexboard_core::KeyCommand;

use crate::action::{Action, ActionRequestQueue};

struct Trigger {
    key: Key,
    command: bool,
}

impl Trigger {
    const fn new(key: Key, command: bool) -> Self {
        Self { key, command }
    }
}

struct Shortcut {
    trigger: Trigger,
    action: Action,
}

impl Shortcut {
    const fn command(key: Key, action: Action) -> Self {
        Self {
            trigger: Trigger::new(key, true),
            action,
        }
    }

    const fn plain(key: Key, action: Action) -> Self {
        Self {
            trigger: Trigger::new(key, false),
            action,
        }
    }
}

const SHORTCUTS: [Shortcut; 5] = [
    Shortcut::command(Key::N, Action::NewGame),
    Shortcut::plain(Key::M, Action::Key(KeyCommand::CommitMove)),
    Shortcut::plain(Key::P, Action::Key(KeyCommand::Pass)),
    Shortcut::plain(Key::H, Action::ToggleHints),
    Shortcut::plain(Key::Escape, Action::ClearSelection),
];

pub fn handle_input(i: &InputState, action_queue: &mut ActionRequestQueue) {
    // `i.modifiers.command` is true when Ctrl (Windows/Linux) or Cmd (Mac) is pressed
    for action in triggered_actions(|key| i.key_pressed(key), i.modifiers.command) {
        action_queue.request(action);
    }
}

/// Every shortcut fired this frame, in table order.
fn triggered_actions(
    pressed: impl Fn(Key) -> bool,
    command: bool,
) -> impl Iterator<Item = Action> {
    SHORTCUTS
        .into_iter()
        .filter(move |shortcut| {
            shortcut.trigger.command == command && pressed(shortcut.trigger.key)
        })
        .map(|shortcut| shortcut.action)
}
