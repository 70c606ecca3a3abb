#![warn(missing_docs)]
//! Desk scene viewer.
//!
//! Renders a small room — desk, computer, headphones, soda glass, plant,
//! textured floor and walls — plays a short camera fly-in at startup, then
//! hands the camera to orbit/pan/zoom navigation.

mod intro;
pub mod math;
mod orbit;
mod room;

use bevy::app::AppExit;
use bevy::prelude::*;
#[cfg(feature = "native")]
use bevy::remote::{RemotePlugin, http::RemoteHttpPlugin};
use bevy_inspector_egui::quick::WorldInspectorPlugin;

#[cfg(feature = "native")]
use clap::Parser;

/// Application-wide game state, used for system scheduling.
#[derive(States, Default, Debug, Clone, PartialEq, Eq, Hash, Reflect)]
pub enum GameState {
    /// Scripted camera fly-in playing.
    #[default]
    Intro,
    /// Normal viewing — orbit/pan/zoom camera control.
    Running,
    /// Debug overlay active (Tab to toggle).
    Debugging,
}

/// Command-line switches (native builds only).
#[cfg(feature = "native")]
#[derive(Parser, Debug)]
#[command(about = "Desk scene viewer")]
struct Cli {
    /// Start directly in orbit control, without the camera fly-in.
    #[arg(long)]
    skip_intro: bool,
}

fn main() {
    #[cfg(feature = "native")]
    let cli = Cli::parse();

    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Desk Scene".into(),
            ..default()
        }),
        ..default()
    }))
    .register_type::<GameState>()
    .init_state::<GameState>()
    .add_plugins(bevy_egui::EguiPlugin::default())
    .add_plugins(room::RoomPlugin(room::RoomConfig::default()))
    .add_plugins(orbit::OrbitPlugin(orbit::OrbitConfig::default()))
    .add_plugins(intro::IntroPlugin(intro::IntroConfig::default()))
    .add_systems(Update, exit_on_esc)
    .add_systems(Update, toggle_inspector)
    .add_plugins(WorldInspectorPlugin::new().run_if(in_state(GameState::Debugging)));

    #[cfg(feature = "native")]
    {
        app.add_plugins(RemotePlugin::default())
            .add_plugins(RemoteHttpPlugin::default());
        if cli.skip_intro {
            app.insert_state(GameState::Running);
        }
    }

    app.run();
}

fn toggle_inspector(
    keys: Res<ButtonInput<KeyCode>>,
    state: Res<State<GameState>>,
    mut next: ResMut<NextState<GameState>>,
) {
    if keys.just_pressed(KeyCode::Tab) {
        match state.get() {
            GameState::Running => next.set(GameState::Debugging),
            GameState::Debugging => next.set(GameState::Running),
            GameState::Intro => {}
        }
    }
}

fn exit_on_esc(keys: Res<ButtonInput<KeyCode>>, mut exit: MessageWriter<AppExit>) {
    if keys.just_pressed(KeyCode::Escape) {
        exit.write(AppExit::Success);
    }
}
