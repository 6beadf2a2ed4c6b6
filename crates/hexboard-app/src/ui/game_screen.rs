use eframe::egui::Ui;
use egui_extras::{Size, StripBuilder};

use super::{board, controls};
use crate::{
    action::ActionRequestQueue,
    ui::{board::BoardViewModel, controls::ControlsViewModel},
};

#[derive(Clone)]
pub(crate) struct GameScreenViewModel<'a> {
    pub(crate) board_vm: BoardViewModel<'a>,
    pub(crate) controls_vm: ControlsViewModel,
}

pub(crate) fn show(
    ui: &mut Ui,
    vm: &GameScreenViewModel<'_>,
    action_queue: &mut ActionRequestQueue,
) {
    let spacing = ui.spacing().item_spacing.y;

    // The board takes whatever the controls leave and stretches to fill it.
    StripBuilder::new(ui)
        .size(Size::remainder())
        .size(Size::exact(spacing))
        .size(Size::exact(controls::HEIGHT))
        .vertical(|mut strip| {
            strip.cell(|ui| {
                board::show(ui, &vm.board_vm, action_queue);
            });
            strip.empty();
            strip.cell(|ui| {
                controls::show(ui, &vm.controls_vm, action_queue);
            });
        });
}
