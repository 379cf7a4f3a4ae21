use bevy::prelude::*;
use bevy::window::{CursorGrabMode, CursorOptions};

use crate::interaction::SelectedBlock;
use crate::player::{KinematicBody, PlayerCamera};
use crate::raycast::{HighlightState, TargetBlock};

const MENU_OVERLAY: Color = Color::srgba(0.0, 0.0, 0.0, 0.45);
const MENU_BG: Color = Color::srgba(0.08, 0.09, 0.12, 0.92);
const INFO_BG: Color = Color::srgba(0.06, 0.08, 0.12, 0.78);

#[derive(Resource, Default)]
pub struct MenuState {
    pub open: bool,
}

#[derive(Component)]
pub struct DebugInfoText;

#[derive(Component)]
struct PauseMenuRoot;

#[derive(Component)]
struct Crosshair;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MenuState>()
            .add_systems(Startup, setup_ui)
            .add_systems(Update, (update_debug_info, toggle_pause_menu));
    }
}

fn setup_ui(mut commands: Commands) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                left: px(10.0),
                top: px(10.0),
                padding: UiRect::all(px(6.0)),
                ..default()
            },
            BackgroundColor(INFO_BG),
        ))
        .with_child((
            Text::new(""),
            TextFont {
                font_size: 14.0,
                ..default()
            },
            TextColor(Color::WHITE),
            DebugInfoText,
        ));

    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                width: percent(100.0),
                height: percent(100.0),
                align_items: AlignItems::Center,
                justify_content: JustifyContent::Center,
                ..default()
            },
            Crosshair,
        ))
        .with_children(|parent| {
            parent.spawn((
                Node {
                    width: px(16.0),
                    height: px(2.0),
                    ..default()
                },
                BackgroundColor(Color::srgba(1.0, 1.0, 1.0, 0.8)),
            ));
            parent.spawn((
                Node {
                    position_type: PositionType::Absolute,
                    width: px(2.0),
                    height: px(16.0),
                    ..default()
                },
                BackgroundColor(Color::srgba(1.0, 1.0, 1.0, 0.8)),
            ));
        });

    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                width: percent(100.0),
                height: percent(100.0),
                align_items: AlignItems::Center,
                justify_content: JustifyContent::Center,
                ..default()
            },
            BackgroundColor(MENU_OVERLAY),
            Visibility::Hidden,
            PauseMenuRoot,
        ))
        .with_children(|parent| {
            parent
                .spawn((
                    Node {
                        padding: UiRect::all(px(18.0)),
                        ..default()
                    },
                    BackgroundColor(MENU_BG),
                ))
                .with_child((
                    Text::new("Paused - press Esc to resume"),
                    TextFont {
                        font_size: 20.0,
                        ..default()
                    },
                    TextColor(Color::WHITE),
                ));
        });
}

fn describe_target(target: Option<TargetBlock>) -> String {
    match target {
        Some(hit) => format!(
            "Target: {:?} at ({}, {}, {})\nNormal: ({}, {}, {})",
            hit.kind, hit.pos.x, hit.pos.y, hit.pos.z, hit.normal.x, hit.normal.y, hit.normal.z
        ),
        None => "No block targeted".to_string(),
    }
}

fn update_debug_info(
    highlight: Res<HighlightState>,
    selected: Res<SelectedBlock>,
    player_q: Query<(&Transform, &KinematicBody), With<PlayerCamera>>,
    mut text_q: Query<&mut Text, With<DebugInfoText>>,
) {
    let Ok(mut text) = text_q.single_mut() else {
        return;
    };
    let Ok((transform, body)) = player_q.single() else {
        return;
    };
    let pos = transform.translation;
    text.0 = format!(
        "Position: ({:.2}, {:.2}, {:.2})\nGrounded: {}\nSelected: {:?}\n{}",
        pos.x,
        pos.y,
        pos.z,
        body.grounded,
        selected.0,
        describe_target(highlight.current)
    );
}

fn toggle_pause_menu(
    keys: Res<ButtonInput<KeyCode>>,
    mut menu_state: ResMut<MenuState>,
    mut menu_q: Query<&mut Visibility, With<PauseMenuRoot>>,
    mut crosshair_q: Query<&mut Visibility, (With<Crosshair>, Without<PauseMenuRoot>)>,
    mut cursor_options: Single<&mut CursorOptions>,
) {
    if !keys.just_pressed(KeyCode::Escape) {
        return;
    }

    menu_state.open = !menu_state.open;
    let Ok(mut visibility) = menu_q.single_mut() else {
        return;
    };
    let Ok(mut crosshair_visibility) = crosshair_q.single_mut() else {
        return;
    };

    if menu_state.open {
        *visibility = Visibility::Visible;
        *crosshair_visibility = Visibility::Hidden;
        cursor_options.visible = true;
        cursor_options.grab_mode = CursorGrabMode::None;
    } else {
        *visibility = Visibility::Hidden;
        *crosshair_visibility = Visibility::Visible;
        cursor_options.visible = false;
        cursor_options.grab_mode = CursorGrabMode::Locked;
    }
}
