use lms_reminders_domain::{Entity, ID};
use std::sync::Mutex;

/// Useful functions for creating inmemory repositories

pub fn insert<T: Clone>(val: &T, collection: &Mutex<Vec<T>>) {
    let mut collection = collection.lock().unwrap();
    collection.push(val.clone());
}

pub fn find<T: Clone + Entity>(val_id: &ID, collection: &Mutex<Vec<T>>) -> Option<T> {
    let collection = collection.lock().unwrap();
    collection.iter().find(|item| item.id() == val_id).cloned()
}

pub fn find_by<T: Clone, F: FnMut(&T) -> bool>(
    collection: &Mutex<Vec<T>>,
    mut compare: F,
) -> Vec<T> {
    let collection = collection.lock().unwrap();
    let mut items = Vec::new();
    for item in collection.iter() {
        if compare(item) {
            items.push(item.clone());
        }
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use lms_reminders_domain::Course;

    #[test]
    fn finds_inserted_items() {
        let collection = Mutex::new(vec![]);
        let course = Course::new("CS101", "Introduction to Computer Science");
        insert(&course, &collection);
        insert(&Course::new("CS102", "Algorithms"), &collection);

        assert_eq!(find(&course.id, &collection), Some(course));
        assert!(find(&ID::new(), &collection).is_none());
        assert_eq!(
            find_by(&collection, |c: &Course| c.short_name.starts_with("CS")).len(),
            2
        );
    }
}
