use std::sync::{Arc, Mutex};

use waypost::{
    LocationConfig, LocationSubject, Observer, ObserverError, StaticLocation, Subject,
    SubjectError,
};

#[derive(Default)]
struct Journal {
    seen: Mutex<Vec<String>>,
}

impl Journal {
    fn entries(&self) -> Vec<String> {
        self.seen.lock().unwrap().clone()
    }
}

impl Observer for Journal {
    fn on_update(&self, message: Option<&str>) -> Result<(), ObserverError> {
        self.seen
            .lock()
            .unwrap()
            .push(message.unwrap_or("<none>").to_string());
        Ok(())
    }
}

struct Refuses;

impl Observer for Refuses {
    fn on_update(&self, message: Option<&str>) -> Result<(), ObserverError> {
        Err(ObserverError::fail(format!("refused {message:?}")))
    }
}

#[test]
fn navigation_is_broadcast_to_every_observer() {
    let first = Arc::new(Journal::default());
    let second = Arc::new(Journal::default());

    let mut subject = LocationSubject::new();
    Arc::clone(&first).observe(&mut subject);
    Arc::clone(&second).observe(&mut subject);

    for href in ["http://app/home", "http://app/docs/", "settings/profile"] {
        subject.set_href_and_notify(href).unwrap();
    }

    assert_eq!(first.entries(), vec!["home", "docs", "profile"]);
    assert_eq!(second.entries(), first.entries());
}

#[test]
fn forgotten_observer_stops_receiving() {
    let journal = Arc::new(Journal::default());
    let mut subject = LocationSubject::new();
    Arc::clone(&journal).observe(&mut subject);

    subject.set_href_and_notify("a/one").unwrap();
    journal.forget(&mut subject).unwrap();
    subject.set_href_and_notify("a/two").unwrap();

    assert_eq!(journal.entries(), vec!["one"]);
    assert_eq!(subject.observer_count(), 0);
}

#[test]
fn failing_observer_aborts_remaining_deliveries() {
    let before = Arc::new(Journal::default());
    let after = Arc::new(Journal::default());

    let mut subject = LocationSubject::new();
    subject.attach(before.clone());
    subject.attach(Arc::new(Refuses));
    subject.attach(after.clone());

    let err = subject.set_href_and_notify("x/y").unwrap_err();
    assert_eq!(err.as_label(), "subject_observer_failed");
    assert_eq!(subject.message(), Some("y"));
    assert_eq!(before.entries(), vec!["y"]);
    assert!(after.entries().is_empty());
}

#[test]
fn rejected_href_does_not_notify_or_mutate() {
    let journal = Arc::new(Journal::default());
    let mut subject = LocationSubject::new();
    subject.attach(journal.clone());
    subject.set_href("http://host/page").unwrap();

    let err = subject.set_href_and_notify("ftp://foo.bar").unwrap_err();
    assert!(matches!(err, SubjectError::InvalidTransport { .. }));
    assert!(journal.entries().is_empty());
    assert_eq!(subject.href().unwrap(), "http://host/page");
    assert_eq!(subject.message(), Some("page"));
}

#[test]
fn environment_location_is_used_until_href_is_set() {
    let mut subject = LocationSubject::with_config(LocationConfig::default())
        .with_source(StaticLocation::new("https://site/start"));
    assert_eq!(subject.last_part().unwrap(), "start");
    assert_eq!(subject.message(), None);

    subject.set_href("https://site/next").unwrap();
    assert_eq!(subject.last_part().unwrap(), "next");
}

#[test]
fn subject_can_be_used_as_trait_object() {
    let journal = Arc::new(Journal::default());
    let mut location = LocationSubject::new();
    location.set_href("dyn/works").unwrap();

    let subject: &mut dyn Subject = &mut location;
    subject.attach(journal.clone());
    subject.broadcast().unwrap();
    subject.detach(journal.as_ref()).unwrap();

    assert_eq!(journal.entries(), vec!["works"]);
}
