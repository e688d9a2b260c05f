use std::rc::Rc;

use capture_guard::{Capturable, CaptureItem, Captured, ReferenceContainer, Strategy, Strong};

#[test]
fn keeps_object_alive() {
    let mut object = Some(Rc::new(1));
    let mut strong = Strong::new(object.as_ref().unwrap());

    assert!(Rc::ptr_eq(
        &strong.object().unwrap(),
        object.as_ref().unwrap()
    ));

    let weak = Rc::downgrade(object.as_ref().unwrap());
    object = None;
    assert!(object.is_none());
    assert!(strong.object().is_some());
    assert!(weak.upgrade().is_some());

    strong.set_object(None);
    assert!(strong.object().is_none());
    assert!(weak.upgrade().is_none());
}

#[test]
fn guarded_closure_owns_object() {
    let object = Rc::new(String::from("owned"));
    let weak = Rc::downgrade(&object);

    let closure = object
        .capture_as(Strategy::Strong)
        .fn_or(0, |object: Rc<String>, ()| object.len());
    drop(object);

    assert_eq!(closure(()), 5);
    drop(closure);
    assert!(weak.upgrade().is_none());
}

#[test]
fn empty_strong_falls_back() {
    let closure = Strong::<Rc<u8>>::empty().capture().fn_or(9, |object, ()| *object);
    assert_eq!(closure(()), 9);
}

#[test]
fn take_releases_object() {
    let object = Rc::new(3);
    let mut strong = Strong::from(Rc::clone(&object));
    assert_eq!(Rc::strong_count(&object), 2);

    assert!(strong.take().is_some());
    assert_eq!(Rc::strong_count(&object), 1);
    assert_eq!(strong.strategy(), Strategy::Strong);
}

#[test]
fn erased_capture_item() {
    let object = Rc::new(0);
    let item: CaptureItem<Captured<Rc<i32>>> = CaptureItem::erased(Strong::new(&object));
    assert!(matches!(item.into_inner(), Captured::Strong(_)));
}
