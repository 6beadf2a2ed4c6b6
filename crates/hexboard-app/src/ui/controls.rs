use eframe::egui::{Button, RichText, Ui};
use hexboard_core::Tile;

use crate::{
    action::{Action, ActionRequestQueue},
    state::{GameEvent, player_name},
};

/// Height reserved for the controls bar, in points.
pub(crate) const HEIGHT: f32 = 36.0;

#[derive(Debug, Clone)]
pub(crate) struct ControlsViewModel {
    pub(crate) turn: Tile,
    pub(crate) piece_counts: [usize; 2],
    pub(crate) last_event: Option<GameEvent>,
    pub(crate) hints: bool,
    pub(crate) actions_enabled: bool,
}

impl ControlsViewModel {
    #[must_use]
    pub(crate) fn status_text(&self) -> String {
        match &self.last_event {
            Some(event) => event.to_string(),
            None => format!("{} to move", player_name(self.turn)),
        }
    }

    fn is_rejection(&self) -> bool {
        matches!(self.last_event, Some(GameEvent::Rejected(_)))
    }
}

pub(crate) fn show(ui: &mut Ui, vm: &ControlsViewModel, action_queue: &mut ActionRequestQueue) {
    ui.horizontal_centered(|ui| {
        ui.label(RichText::new(format!("Turn: {}", player_name(vm.turn))).strong());
        ui.separator();
        let [a, b] = vm.piece_counts;
        ui.label(format!(
            "{} {a} / {} {b}",
            player_name(Tile::PlayerA),
            player_name(Tile::PlayerB)
        ));
        ui.separator();

        let status = RichText::new(vm.status_text());
        let status = if vm.is_rejection() {
            status.color(ui.visuals().warn_fg_color)
        } else {
            status
        };
        ui.label(status);
        ui.separator();

        if ui
            .add(Button::new("Toggle hints").selected(vm.hints))
            .on_hover_text("Show the number of occupied neighbours (H)")
            .clicked()
        {
            action_queue.request(Action::ToggleHints);
        }

        let mut enabled = vm.actions_enabled;
        if ui
            .checkbox(&mut enabled, "Player actions enabled")
            .changed()
        {
            action_queue.request(Action::SetActionsEnabled(enabled));
        }

        if ui
            .button("New game")
            .on_hover_text("Ctrl+N")
            .clicked()
        {
            action_queue.request(Action::NewGame);
        }
    });
}
