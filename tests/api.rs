mod helpers;

use chrono::Duration;
use helpers::setup::spawn_app;
use helpers::utils::{create_org, event_input};
use orgreminders_sdk::{
    APIError, CreateMemberInput, ID, UpdateEventInput, UpdateMemberInput, UpdateOrganizationInput,
};

#[actix_web::main]
#[test]
async fn test_status_ok() {
    let (_, sdk, _) = spawn_app().await;
    assert!(sdk.status.check_health().await.is_ok());
}

#[actix_web::main]
#[test]
async fn test_crud_organization() {
    let (_, sdk, _) = spawn_app().await;
    let org = create_org(&sdk, "Scouts").await;
    assert_eq!(org.name, "Scouts");
    assert!(org.active);

    // Names are unique
    let res = sdk
        .organization
        .create(orgreminders_sdk::CreateOrganizationInput {
            name: "Scouts".into(),
            time_zone: "UTC".into(),
            description: None,
            administrators: vec![],
        })
        .await;
    assert!(matches!(res, Err(APIError::UnexpectedStatusCode(s)) if s.as_u16() == 409));

    let res = sdk
        .organization
        .get(org.id.clone())
        .await
        .expect("To get organization");
    assert_eq!(res.organization.id, org.id);

    let res = sdk
        .organization
        .get_by_administrator("admin@example.com")
        .await
        .expect("To list organizations");
    assert_eq!(res.organizations.len(), 1);

    let res = sdk
        .organization
        .update(UpdateOrganizationInput {
            organization_id: org.id.clone(),
            time_zone: Some("Europe/Oslo".into()),
            ..Default::default()
        })
        .await
        .expect("To update organization");
    assert_eq!(res.organization.time_zone, "Europe/Oslo");

    let res = sdk
        .organization
        .update(UpdateOrganizationInput {
            organization_id: org.id.clone(),
            time_zone: Some("Mars/Olympus".into()),
            ..Default::default()
        })
        .await;
    assert!(matches!(res, Err(APIError::UnexpectedStatusCode(s)) if s.as_u16() == 400));
}

#[actix_web::main]
#[test]
async fn test_crud_member() {
    let (_, sdk, _) = spawn_app().await;
    let org = create_org(&sdk, "Scouts").await;

    let member = sdk
        .member
        .create(CreateMemberInput {
            name: "Kim".into(),
            email: Some("kim@example.com".into()),
            cell: Some("5551234567".into()),
            carrier: Some("att".into()),
            email_on: true,
            text_on: true,
            orgs: vec!["Scouts".into()],
            ..Default::default()
        })
        .await
        .expect("To create member")
        .member;
    assert_eq!(member.text_address, "5551234567@txt.att.net");

    let res = sdk
        .member
        .create(CreateMemberInput {
            name: "Someone else".into(),
            email: Some("kim@example.com".into()),
            ..Default::default()
        })
        .await;
    assert!(matches!(res, Err(APIError::UnexpectedStatusCode(s)) if s.as_u16() == 409));

    let res = sdk
        .member
        .update(UpdateMemberInput {
            member_id: member.id.clone(),
            name: Some("Kim Lee".into()),
            ..Default::default()
        })
        .await
        .expect("To update member");
    assert_eq!(res.member.name, "Kim Lee");

    let members = sdk
        .organization
        .get_members(org.id.clone())
        .await
        .expect("To list members")
        .members;
    assert_eq!(members.len(), 1);
    assert_eq!(members[0].id, member.id);
}

#[actix_web::main]
#[test]
async fn test_crud_event() {
    let (_, sdk, _) = spawn_app().await;
    let org = create_org(&sdk, "Scouts").await;

    let event = sdk
        .event
        .create(event_input(vec!["Scouts".into()], Duration::days(3)))
        .await
        .expect("To create event")
        .event;
    assert_eq!(event.schedule.offsets, vec!["1d", "2h"]);

    let res = sdk
        .event
        .create(event_input(vec!["Unknown".into()], Duration::days(3)))
        .await;
    assert!(matches!(res, Err(APIError::UnexpectedStatusCode(s)) if s.as_u16() == 404));

    let res = sdk
        .event
        .get(event.id.clone())
        .await
        .expect("To get event");
    assert_eq!(res.event.title, "Pack meeting");

    let res = sdk
        .event
        .update(UpdateEventInput {
            event_id: event.id.clone(),
            title: Some("Campfire".into()),
            add_offsets: vec!["30m".into()],
            remove_offsets: vec!["1d".into()],
            ..Default::default()
        })
        .await
        .expect("To update event");
    assert_eq!(res.event.title, "Campfire");
    assert_eq!(res.event.schedule.offsets, vec!["2h", "30m"]);

    let events = sdk
        .organization
        .get_events(org.id.clone(), true)
        .await
        .expect("To list org events")
        .events;
    assert_eq!(events.len(), 1);

    let events = sdk.event.list(true).await.expect("To list events").events;
    assert_eq!(events.len(), 1);
}

#[actix_web::main]
#[test]
async fn test_notify_event() {
    let (_, sdk, _) = spawn_app().await;
    create_org(&sdk, "Scouts").await;

    let event = sdk
        .event
        .create(event_input(vec!["Scouts".into()], Duration::days(1)))
        .await
        .expect("To create event")
        .event;
    let res = sdk
        .event
        .notify(event.id.clone())
        .await
        .expect("To notify event");
    assert!(res.notified);

    let overdue = sdk
        .event
        .create(event_input(vec!["Scouts".into()], Duration::days(-1)))
        .await
        .expect("To create event")
        .event;
    let res = sdk
        .event
        .notify(overdue.id.clone())
        .await
        .expect("To notify event");
    assert!(!res.notified);

    let res = sdk.event.notify(ID::new()).await;
    assert!(matches!(res, Err(APIError::UnexpectedStatusCode(s)) if s.as_u16() == 404));
}

#[actix_web::main]
#[test]
async fn test_send_reminders_requires_cron_secret() {
    let (app, sdk, _) = spawn_app().await;

    let res = sdk.event.send_reminders("wrong secret").await;
    assert!(matches!(res, Err(APIError::UnexpectedStatusCode(s)) if s.as_u16() == 401));

    let res = sdk
        .event
        .send_reminders(&app.config.cron_secret_code)
        .await
        .expect("To run the reminder sweep");
    assert!(res.events.is_empty());
}
