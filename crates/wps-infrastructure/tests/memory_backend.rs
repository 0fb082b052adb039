//! Services running against the in-memory backend.

use std::sync::Arc;

use wps_core::domain::{
    Industry, LobType, NewCompanyProfile, NewLineOfBusiness, NewSpace, PredefinedAttribute, PredefinedGoal, ScenarioObjective,
    ScenarioStatus, Slot, SlotCounts,
};
use wps_core::error::DomainError;
use wps_core::services::{ConfirmationAnswer, DeleteOutcome};
use wps_core::wizard::{BasicInfoPatch, FinancialPatch};
use wps_core::{Capability, ScenarioWizard, Services, ToastCenter};
use wps_infrastructure::{MemoryStore, Table};

const ADMIN: Capability = Capability::Admin;

fn services(store: &MemoryStore) -> (Services, Arc<ToastCenter>) {
    let toasts = Arc::new(ToastCenter::new(50));
    (Services::new(store.repositories(), toasts.clone()), toasts)
}

fn acme() -> NewCompanyProfile {
    NewCompanyProfile {
        name: "Acme".to_string(),
        industry: Industry::Technology,
        company_size: 50,
        number_of_sites: Some(2),
    }
}

#[tokio::test]
async fn test_acme_collaboration_lands_in_secondary_with_zero_importance() {
    let store = MemoryStore::with_default_weightings();
    let (services, _) = services(&store);

    services.profile.initialize(ADMIN, acme()).await.unwrap();
    let added = services
        .attributes
        .add(ADMIN, PredefinedAttribute::Collaboration, Slot::Secondary)
        .await
        .unwrap();

    assert_eq!(added.name, PredefinedAttribute::Collaboration);
    assert_eq!(added.importance, 0);
    assert!(!added.is_primary);

    let attributes = services.attributes.list().await.unwrap();
    assert_eq!(attributes.len(), 1);
    let counts = SlotCounts::from_flags(attributes.iter().map(|a| a.is_primary));
    assert_eq!((counts.primary, counts.secondary), (0, 1));
}

#[tokio::test]
async fn test_added_attribute_takes_industry_default_weight() {
    let store = MemoryStore::with_default_weightings();
    let (services, _) = services(&store);
    services.profile.initialize(ADMIN, acme()).await.unwrap();

    let seeded = services
        .attributes
        .add(ADMIN, PredefinedAttribute::TechnologyInfrastructure, Slot::Primary)
        .await
        .unwrap();
    assert_eq!(seeded.importance, 25);

    // Security is weighted for Finance, not Technology.
    let unseeded = services
        .attributes
        .add(ADMIN, PredefinedAttribute::Security, Slot::Primary)
        .await
        .unwrap();
    assert_eq!(unseeded.importance, 0);
}

#[tokio::test]
async fn test_slot_caps_hold_across_adds_and_toggles() {
    let store = MemoryStore::new();
    let (services, toasts) = services(&store);

    for name in &PredefinedAttribute::ALL[..3] {
        services.attributes.add(ADMIN, *name, Slot::Primary).await.unwrap();
    }
    let rejected = services
        .attributes
        .add(ADMIN, PredefinedAttribute::ALL[3], Slot::Primary)
        .await;
    assert!(matches!(rejected, Err(DomainError::SlotLimitReached { slot: Slot::Primary, .. })));

    for name in &PredefinedAttribute::ALL[3..6] {
        services.attributes.add(ADMIN, *name, Slot::Secondary).await.unwrap();
    }

    let attributes = services.attributes.list().await.unwrap();
    let secondary = attributes.iter().find(|a| !a.is_primary).unwrap();
    let toggled = services.attributes.toggle_primary(ADMIN, secondary.id).await;
    assert!(matches!(toggled, Err(DomainError::SlotLimitReached { slot: Slot::Primary, .. })));

    let attributes = services.attributes.list().await.unwrap();
    let counts = SlotCounts::from_flags(attributes.iter().map(|a| a.is_primary));
    assert_eq!((counts.primary, counts.secondary), (3, 3));
    assert_eq!(store.row_count(Table::WorkspaceAttributes), 6);

    let messages: Vec<String> = toasts.drain().into_iter().map(|t| t.description).collect();
    assert!(messages.contains(&"Workspace attribute added successfully".to_string()));
}

#[tokio::test]
async fn test_goal_slot_caps() {
    let store = MemoryStore::new();
    let (services, _) = services(&store);

    for name in &PredefinedGoal::ALL[..3] {
        services.goals.add(ADMIN, *name, Slot::Primary).await.unwrap();
    }
    let moved = services.goals.list().await.unwrap()[0].clone();
    let demoted = services.goals.toggle_primary(ADMIN, moved.id).await.unwrap();
    assert!(!demoted.is_primary);

    services.goals.add(ADMIN, PredefinedGoal::ALL[3], Slot::Primary).await.unwrap();
    let rejected = services.goals.add(ADMIN, PredefinedGoal::ALL[4], Slot::Primary).await;
    assert!(rejected.is_err());

    let goals = services.goals.list().await.unwrap();
    assert_eq!(goals.iter().filter(|g| g.is_primary).count(), 3);
    assert!(goals.iter().all(|g| g.importance == 0));
}

#[tokio::test]
async fn test_declined_delete_makes_no_backend_call() {
    let store = MemoryStore::new();
    let (services, toasts) = services(&store);
    let attribute = services
        .attributes
        .add(ADMIN, PredefinedAttribute::Daylight, Slot::Primary)
        .await
        .unwrap();
    let before = services.attributes.list().await.unwrap();
    toasts.drain();
    let calls = store.call_count();

    let confirmation = services.attributes.request_delete(ADMIN, attribute.id).unwrap();
    let outcome = services
        .attributes
        .resolve_delete(ADMIN, confirmation, ConfirmationAnswer::Declined)
        .await
        .unwrap();

    assert_eq!(outcome, DeleteOutcome::Cancelled);
    assert_eq!(store.call_count(), calls);
    assert!(toasts.is_empty());
    assert_eq!(services.attributes.list().await.unwrap(), before);
}

#[tokio::test]
async fn test_q1_review_submission_writes_every_child_row() {
    let store = MemoryStore::new();
    let (services, toasts) = services(&store);
    let mut wizard = ScenarioWizard::new(toasts.clone());

    wizard
        .set_basic_info(BasicInfoPatch {
            name: Some("Q1 Review".to_string()),
            objective: Some(ScenarioObjective::CostOptimization),
            status: Some(ScenarioStatus::Completed),
            ..Default::default()
        })
        .unwrap();
    wizard.next().unwrap();
    wizard.toggle_lob(1).unwrap();
    wizard.toggle_lob(2).unwrap();
    wizard.next().unwrap();
    wizard.toggle_space(5).unwrap();
    wizard.next().unwrap();
    wizard.set_rating(1, 1, 80).unwrap();
    wizard.next().unwrap();
    wizard
        .set_financial(
            5,
            FinancialPatch {
                monthly_cost: Some(1000.0),
                lease_term_months: Some(12),
                ..Default::default()
            },
        )
        .unwrap();

    let submission = wizard.submit(&services.scenarios, ADMIN).await.unwrap();

    assert_eq!(submission.scenario.status, ScenarioStatus::Draft);
    assert_eq!(store.row_count(Table::Scenarios), 1);
    assert_eq!(store.row_count(Table::ScenarioLobs), 2);
    assert_eq!(store.row_count(Table::ScenarioSpaces), 1);
    assert_eq!(store.row_count(Table::ScenarioFinancials), 1);
    assert_eq!(store.row_count(Table::ScenarioAttributeRatings), 1);
    assert!(!wizard.is_open());

    let details = services.scenarios.details(submission.scenario.id).await.unwrap();
    assert_eq!(details.lobs.len(), 2);
    assert_eq!(details.financials[0].monthly_cost, Some(1000.0));
    assert_eq!(details.financials[0].lease_term_months, Some(12));
}

#[tokio::test]
async fn test_failed_child_insert_keeps_earlier_rows() {
    let store = MemoryStore::new();
    let (services, toasts) = services(&store);
    let cached = services.scenarios.list().await.unwrap();
    assert!(cached.is_empty());

    store.inject_failure(Table::ScenarioSpaces);
    let mut wizard = ScenarioWizard::new(toasts.clone());
    wizard
        .set_basic_info(BasicInfoPatch {
            name: Some("Partial".to_string()),
            ..Default::default()
        })
        .unwrap();
    wizard.next().unwrap();
    wizard.toggle_lob(1).unwrap();
    wizard.next().unwrap();
    wizard.toggle_space(2).unwrap();
    wizard.next().unwrap();
    wizard.next().unwrap();

    let result = wizard.submit(&services.scenarios, ADMIN).await;

    assert!(result.is_err());
    assert!(wizard.is_open());
    assert_eq!(store.row_count(Table::Scenarios), 1);
    assert_eq!(store.row_count(Table::ScenarioLobs), 1);
    assert_eq!(store.row_count(Table::ScenarioSpaces), 0);
    assert_eq!(store.row_count(Table::ScenarioAttributeRatings), 0);

    let last = toasts.drain().pop().unwrap();
    assert_eq!(last.description, "Failed to create scenario");

    // The list cache was not invalidated by the failed submission.
    assert!(services.scenarios.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_removing_a_selection_refreshes_scenario_details() {
    let store = MemoryStore::new();
    let (services, toasts) = services(&store);
    let lob = services
        .lobs
        .create(
            ADMIN,
            NewLineOfBusiness {
                name: "Sales".to_string(),
                lob_type: LobType::Sales,
                headcount: Some(40),
                company_id: None,
            },
        )
        .await
        .unwrap();
    let space = services
        .spaces
        .create(
            ADMIN,
            NewSpace {
                name: "HQ".to_string(),
                location: "Downtown".to_string(),
                square_feet: 12_000,
                monthly_cost: Some(1000.0),
                company_id: None,
            },
        )
        .await
        .unwrap();

    let mut wizard = ScenarioWizard::new(toasts.clone());
    wizard
        .set_basic_info(BasicInfoPatch {
            name: Some("Consolidation".to_string()),
            ..Default::default()
        })
        .unwrap();
    wizard.next().unwrap();
    wizard.toggle_lob(lob.id).unwrap();
    wizard.next().unwrap();
    wizard.toggle_space(space.id).unwrap();
    wizard.next().unwrap();
    wizard.next().unwrap();
    let scenario_id = wizard.submit(&services.scenarios, ADMIN).await.unwrap().scenario.id;

    let before = services.scenarios.details(scenario_id).await.unwrap();
    assert_eq!(before.lobs.len(), 1);
    assert_eq!(before.spaces.len(), 1);

    services.lobs.remove(ADMIN, lob.id).await.unwrap();
    assert_eq!(store.row_count(Table::ScenarioLobs), 0);
    let after_lob = services.scenarios.details(scenario_id).await.unwrap();
    assert!(after_lob.lobs.is_empty());
    assert_eq!(after_lob.spaces.len(), 1);

    services.spaces.remove(ADMIN, space.id).await.unwrap();
    let after_space = services.scenarios.details(scenario_id).await.unwrap();
    assert!(after_space.spaces.is_empty());
}
