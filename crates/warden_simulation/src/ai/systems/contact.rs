//! Contact systems: источник контактов (proximity / rapier) → TargetCaught.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::ai::controller::GuardController;
use crate::ai::events::{GuardContact, TargetCaught};
use crate::ai::ports::OutcomeNotifier;
use crate::components::Intruder;

/// Решение по одному контакту: поймали ли intruder'а
///
/// `report_catches` — debug override охранника (false → контакт игнорируется).
pub fn resolve_contact(
    contact: &GuardContact,
    report_catches: bool,
    other_is_intruder: bool,
    notifier: &mut dyn OutcomeNotifier,
) -> bool {
    if !report_catches || !other_is_intruder {
        return false;
    }

    notifier.report_caught(TargetCaught {
        guard: contact.guard,
        target: contact.other,
    });
    true
}

/// Система: headless контакты по дистанции (rising edge)
///
/// Контакт = intruder ближе `catch_radius` охранника. Событие только на
/// начале контакта; пока пара остаётся рядом, повторов нет.
pub fn detect_proximity_contacts(
    guards: Query<(Entity, &Transform, &GuardController), Without<Intruder>>,
    intruders: Query<(Entity, &Transform), (With<Intruder>, Without<GuardController>)>,
    mut touching: Local<Vec<(Entity, Entity)>>,
    mut contacts: EventWriter<GuardContact>,
) {
    let mut now_touching = Vec::new();

    for (guard, guard_transform, controller) in guards.iter() {
        let radius = controller.config().catch_radius;
        for (intruder, intruder_transform) in intruders.iter() {
            let distance_sq = guard_transform.translation.distance_squared(intruder_transform.translation);
            if distance_sq > radius * radius {
                continue;
            }

            let pair = (guard, intruder);
            if !touching.contains(&pair) {
                contacts.write(GuardContact { guard, other: intruder });
            }
            now_touching.push(pair);
        }
    }

    *touching = now_touching;
}

/// Система: rapier CollisionEvent::Started → GuardContact
pub fn forward_rapier_contacts(
    mut collisions: EventReader<CollisionEvent>,
    guards: Query<(), With<GuardController>>,
    mut contacts: EventWriter<GuardContact>,
) {
    for event in collisions.read() {
        let CollisionEvent::Started(a, b, _flags) = event else {
            continue;
        };
        let (a, b) = (*a, *b);

        if guards.contains(a) {
            contacts.write(GuardContact { guard: a, other: b });
        } else if guards.contains(b) {
            contacts.write(GuardContact { guard: b, other: a });
        }
    }
}

/// Система: GuardContact → TargetCaught (если разрешено debug override)
pub fn report_catches(
    mut contacts: EventReader<GuardContact>,
    guards: Query<&GuardController>,
    intruders: Query<(), With<Intruder>>,
    mut caught: EventWriter<TargetCaught>,
) {
    for contact in contacts.read() {
        let Ok(controller) = guards.get(contact.guard) else {
            continue;
        };

        let report = controller.config().debug.report_catches;
        if resolve_contact(contact, report, intruders.contains(contact.other), &mut caught) {
            crate::log_info(&format!("Guard {:?} caught intruder {:?}", contact.guard, contact.other));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact() -> GuardContact {
        GuardContact {
            guard: Entity::from_raw(1),
            other: Entity::from_raw(2),
        }
    }

    #[test]
    fn test_contact_with_intruder_reports_catch() {
        let mut sink: Vec<TargetCaught> = Vec::new();

        assert!(resolve_contact(&contact(), true, true, &mut sink));
        assert_eq!(
            sink,
            vec![TargetCaught {
                guard: Entity::from_raw(1),
                target: Entity::from_raw(2)
            }]
        );
    }

    #[test]
    fn test_contact_ignored_when_disabled_or_not_intruder() {
        let mut sink: Vec<TargetCaught> = Vec::new();

        assert!(!resolve_contact(&contact(), false, true, &mut sink));
        assert!(!resolve_contact(&contact(), true, false, &mut sink));
        assert!(sink.is_empty());
    }
}
