//! Item system functions.

use hecs::{Entity, World};
use tracing::debug;

use crate::components::{Hitbox, Item};
use crate::constants::{ITEM_BOB_AMPLITUDE, ITEM_BOB_STEP};
use crate::events::{EventQueue, GameEvent};
use crate::queries;
use crate::systems::combat::heal_player;

/// Bob every item and let the player pick up the ones it touches.
///
/// The bob moves the item's box, so pickup uses wherever the item is drawn
/// this tick.
pub fn update_items(world: &mut World, player: Entity, events: &mut EventQueue) {
    let Some(player_box) = queries::get_hitbox(world, player) else {
        return;
    };

    for item in queries::ordered::<Item>(world) {
        let Ok((stats, hitbox)) = world.query_one_mut::<(&mut Item, &mut Hitbox)>(item) else {
            continue;
        };
        stats.bob_phase += ITEM_BOB_STEP;
        hitbox.pos.y += stats.bob_phase.sin() * ITEM_BOB_AMPLITUDE;

        if !hitbox.intersects(&player_box) {
            continue;
        }
        let kind = stats.kind;
        let healed = heal_player(world, player, kind.heal_amount());
        let _ = world.despawn(item);
        events.push(GameEvent::ItemPickedUp { kind, healed });
        debug!(item = kind.name(), healed, "item_picked_up");
    }
}
