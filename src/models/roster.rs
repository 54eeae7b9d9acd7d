//! Fixed-size passenger roster.

use super::names_match;

/// An ordered, fixed-length set of passenger slots.
///
/// Each slot is either empty or holds a passenger's display name. The number
/// of slots is fixed at construction; removing a passenger empties its slot
/// without shifting the others.
///
/// # Examples
///
/// ```
/// use u_rides::models::Roster;
///
/// let mut roster = Roster::with_seats(3);
/// assert_eq!(roster.seat("Al"), Some(0));
/// assert_eq!(roster.seat("Bo"), Some(1));
/// assert!(roster.remove("al"));
/// assert_eq!(roster.seat("Cy"), Some(0));
/// assert_eq!(roster.names().collect::<Vec<_>>(), vec!["Cy", "Bo"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    slots: Vec<Option<String>>,
}

impl Roster {
    /// Creates a roster with `seats` empty slots.
    pub fn with_seats(seats: usize) -> Self {
        Self {
            slots: vec![None; seats],
        }
    }

    /// Creates a roster from an initial slot layout.
    ///
    /// The slot count is the length of `slots`.
    pub fn from_slots(slots: Vec<Option<String>>) -> Self {
        Self { slots }
    }

    /// Total number of slots.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of empty slots.
    pub fn empty_seats(&self) -> usize {
        self.slots.iter().filter(|s| s.is_none()).count()
    }

    /// Number of occupied slots.
    pub fn occupied(&self) -> usize {
        self.capacity() - self.empty_seats()
    }

    /// Returns `true` if no slot is empty.
    pub fn is_full(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Returns the raw slot layout.
    pub fn slots(&self) -> &[Option<String>] {
        &self.slots
    }

    /// Places `name` in the first empty slot.
    ///
    /// Returns the slot index, or `None` if every slot is taken.
    pub fn seat(&mut self, name: &str) -> Option<usize> {
        let index = self.slots.iter().position(Option::is_none)?;
        self.slots[index] = Some(name.to_string());
        Some(index)
    }

    /// Empties the first slot whose name matches `name`, ignoring case.
    ///
    /// Returns `false` if no slot matched.
    pub fn remove(&mut self, name: &str) -> bool {
        let found = self
            .slots
            .iter()
            .position(|s| s.as_deref().is_some_and(|p| names_match(p, name)));
        match found {
            Some(index) => {
                self.slots[index] = None;
                true
            }
            None => false,
        }
    }

    /// Returns `true` if some slot holds `name`, ignoring case.
    pub fn contains(&self, name: &str) -> bool {
        self.names().any(|p| names_match(p, name))
    }

    /// Occupied slots in slot order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.slots.iter().filter_map(|s| s.as_deref())
    }
}
