use std::rc::Rc;

use capture_guard::{Captured, Error, ReferenceContainer, Strategy};

type Object = Rc<String>;

fn object() -> Object {
    Rc::new(String::from("object"))
}

#[test]
fn weak_by_default() {
    let object = object();

    assert!(matches!(Captured::new(&object, Strategy::default()), Captured::Weak(_)));
    assert!(matches!(Captured::new(&object, Strategy::Weak), Captured::Weak(_)));
    assert!(matches!(Captured::with_flag(Some(&object), false), Captured::Weak(_)));
    assert!(matches!(Captured::<Object>::default(), Captured::Weak(_)));
}

#[test]
fn weak_from_option() {
    let object = object();

    for present in [None, Some(&object)] {
        let checked = Captured::try_from_option(present, Strategy::Weak).unwrap();
        assert!(matches!(checked, Captured::Weak(_)));
        let fallback = Captured::from_option(present, Strategy::Weak);
        assert!(matches!(fallback, Captured::Weak(_)));
    }
}

#[test]
fn unowned_from_option() {
    let object = object();

    let unowned = Captured::new(&object, Strategy::Unowned);
    assert!(matches!(unowned, Captured::Unowned(_)));

    let present = Captured::try_from_option(Some(&object), Strategy::Unowned).unwrap();
    assert!(matches!(present, Captured::Unowned(_)));
    let present = Captured::from_option(Some(&object), Strategy::Unowned);
    assert!(matches!(present, Captured::Unowned(_)));

    assert_eq!(
        Captured::<Object>::try_from_option(None, Strategy::Unowned).unwrap_err(),
        Error::MissingObject {
            strategy: Strategy::Unowned
        }
    );
    // Falls back to a weak capture.
    let absent = Captured::<Object>::from_option(None, Strategy::Unowned);
    assert!(matches!(absent, Captured::Weak(_)));
    assert!(absent.object().is_none());
}

#[test]
fn strong_from_option() {
    let object = object();

    assert!(matches!(Captured::new(&object, Strategy::Strong), Captured::Strong(_)));
    assert!(matches!(Captured::with_flag(Some(&object), true), Captured::Strong(_)));
    assert!(matches!(Captured::<Object>::with_flag(None, true), Captured::Strong(_)));

    let absent = Captured::<Object>::try_from_option(None, Strategy::Strong).unwrap();
    assert!(matches!(absent, Captured::Strong(_)));
    assert!(absent.object().is_none());
}

#[test]
fn strategy_matches_variant() {
    let object = object();

    for strategy in [Strategy::Weak, Strategy::Strong, Strategy::Unowned] {
        let captured = Captured::new(&object, strategy);
        assert_eq!(captured.strategy(), strategy);
        assert!(Rc::ptr_eq(&captured.object().unwrap(), &object));
    }
}

#[test]
fn set_object_delegates() {
    let first = object();
    let second = Rc::new(String::from("second"));
    let mut captured = Captured::new(&first, Strategy::Strong);

    captured.set_object(Some(Rc::clone(&second)));
    assert_eq!(captured.object().as_deref().map(String::as_str), Some("second"));

    captured.set_object(None);
    assert!(captured.object().is_none());
}

#[test]
fn strategy_from_config_text() {
    assert_eq!("weak".parse::<Strategy>(), Ok(Strategy::Weak));
    assert_eq!(" Strong\n".parse::<Strategy>(), Ok(Strategy::Strong));
    assert_eq!("UNOWNED".parse::<Strategy>(), Ok(Strategy::Unowned));
    assert_eq!(
        "borrowed".parse::<Strategy>(),
        Err(Error::UnknownStrategy("borrowed".to_owned()))
    );
    assert_eq!(Strategy::Unowned.to_string(), "unowned");
}
