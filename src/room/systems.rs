use bevy::asset::LoadState;
use bevy::prelude::*;

use super::entities::PendingAssets;

/// Logs each tracked asset's load completion or failure, exactly once.
pub fn report_asset_status(server: Res<AssetServer>, mut assets: ResMut<PendingAssets>) {
    assets
        .pending
        .retain(|(label, handle)| match server.load_state(handle.id()) {
            LoadState::Loaded => {
                info!("{label} loaded");
                false
            }
            LoadState::Failed(err) => {
                error!("{label} failed to load: {err}");
                false
            }
            _ => true,
        });
}
