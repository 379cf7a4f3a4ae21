use bevy::prelude::*;

use crate::raycast::{HighlightState, TargetBlock, TargetingSet};
use crate::ui::MenuState;
use crate::voxel::{EditError, VoxelKind, VoxelWorld};

/// Block type placed by the right mouse button.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectedBlock(pub VoxelKind);

impl Default for SelectedBlock {
    fn default() -> Self {
        Self(VoxelKind::Grass)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockAction {
    Remove,
    Place(VoxelKind),
}

const DIGIT_KEYS: [(KeyCode, u32); 9] = [
    (KeyCode::Digit1, 1),
    (KeyCode::Digit2, 2),
    (KeyCode::Digit3, 3),
    (KeyCode::Digit4, 4),
    (KeyCode::Digit5, 5),
    (KeyCode::Digit6, 6),
    (KeyCode::Digit7, 7),
    (KeyCode::Digit8, 8),
    (KeyCode::Digit9, 9),
];

pub struct InteractionPlugin;

impl Plugin for InteractionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SelectedBlock>().add_systems(
            Update,
            (select_block, handle_block_clicks)
                .chain()
                .after(TargetingSet),
        );
    }
}

/// Apply an edit to the targeted block: removal hits the block itself,
/// placement lands in the empty cell in front of the hit face.
pub fn apply_action(
    world: &mut VoxelWorld,
    target: &TargetBlock,
    action: BlockAction,
) -> Result<(), EditError> {
    match action {
        BlockAction::Remove => world.remove(target.pos).map(|_| ()),
        BlockAction::Place(kind) => world.place(target.placement, kind),
    }
}

fn select_block(keys: Res<ButtonInput<KeyCode>>, mut selected: ResMut<SelectedBlock>) {
    for (key, n) in DIGIT_KEYS {
        if !keys.just_pressed(key) {
            continue;
        }
        match VoxelKind::from_selection(n) {
            Some(kind) => {
                selected.0 = kind;
                info!("Selected block {} ({})", n, kind.def().name);
            }
            None => warn!("No block type with index {}", n),
        }
    }
}

fn handle_block_clicks(
    mouse: Res<ButtonInput<MouseButton>>,
    highlight: Res<HighlightState>,
    selected: Res<SelectedBlock>,
    menu_state: Res<MenuState>,
    mut world: ResMut<VoxelWorld>,
) {
    if menu_state.open {
        return;
    }
    let action = if mouse.just_pressed(MouseButton::Left) {
        BlockAction::Remove
    } else if mouse.just_pressed(MouseButton::Right) {
        BlockAction::Place(selected.0)
    } else {
        return;
    };
    let Some(target) = highlight.current else {
        return;
    };

    match apply_action(&mut world, &target, action) {
        Ok(()) => {}
        Err(EditError::Grid(err)) => error!("{:?} at {} failed: {}", action, target.pos, err),
        Err(err) => debug!("{:?} rejected: {}", action, err),
    }
}
