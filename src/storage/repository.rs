//! Repository interface over the league collections.

use crate::models::{EntityId, Match, Player, PointsTableEntry, Team, ValidationError};

/// A record that can live in a repository.
pub trait Entity: Clone {
    /// Name used in errors and logs.
    const KIND: &'static str;

    fn id(&self) -> &EntityId;

    fn set_id(&mut self, id: EntityId);

    /// Id to assign when a new record arrives without one.
    fn generated_id(&self) -> EntityId;

    fn validate(&self) -> Result<(), ValidationError>;
}

impl Entity for Team {
    const KIND: &'static str = "team";

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn set_id(&mut self, id: EntityId) {
        self.id = id;
    }

    fn generated_id(&self) -> EntityId {
        Team::generated_id(self)
    }

    fn validate(&self) -> Result<(), ValidationError> {
        Team::validate(self)
    }
}

impl Entity for Player {
    const KIND: &'static str = "player";

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn set_id(&mut self, id: EntityId) {
        self.id = id;
    }

    fn generated_id(&self) -> EntityId {
        Player::generated_id(self)
    }

    fn validate(&self) -> Result<(), ValidationError> {
        Player::validate(self)
    }
}

impl Entity for Match {
    const KIND: &'static str = "match";

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn set_id(&mut self, id: EntityId) {
        self.id = id;
    }

    fn generated_id(&self) -> EntityId {
        Match::generated_id(self)
    }

    fn validate(&self) -> Result<(), ValidationError> {
        Match::validate(self)
    }
}

/// Points-table rows are keyed by their team.
impl Entity for PointsTableEntry {
    const KIND: &'static str = "points table entry";

    fn id(&self) -> &EntityId {
        &self.team_id
    }

    fn set_id(&mut self, id: EntityId) {
        self.team_id = id;
    }

    fn generated_id(&self) -> EntityId {
        self.team_id.clone()
    }

    fn validate(&self) -> Result<(), ValidationError> {
        PointsTableEntry::validate(self)
    }
}

/// Get-by-id, list, upsert and remove over one collection.
pub trait Repository<T: Entity> {
    fn get(&self, id: &EntityId) -> Option<&T>;

    /// All records in insertion order.
    fn list(&self) -> &[T];

    /// Replace the record with the same id in place, or append it.
    /// Returns the replaced record.
    fn upsert(&mut self, item: T) -> Option<T>;

    fn remove(&mut self, id: &EntityId) -> Option<T>;

    fn contains(&self, id: &EntityId) -> bool {
        self.get(id).is_some()
    }

    fn len(&self) -> usize {
        self.list().len()
    }

    fn is_empty(&self) -> bool {
        self.list().is_empty()
    }
}

/// Vec-backed repository. Lookups are linear; league collections are tiny.
#[derive(Debug, Clone)]
pub struct InMemoryRepository<T> {
    items: Vec<T>,
}

impl<T> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Entity> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn from_vec(items: Vec<T>) -> Self {
        Self { items }
    }

    fn position(&self, id: &EntityId) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }
}

impl<T: Entity> Repository<T> for InMemoryRepository<T> {
    fn get(&self, id: &EntityId) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    fn list(&self) -> &[T] {
        &self.items
    }

    fn upsert(&mut self, item: T) -> Option<T> {
        match self.position(item.id()) {
            Some(i) => Some(std::mem::replace(&mut self.items[i], item)),
            None => {
                self.items.push(item);
                None
            }
        }
    }

    fn remove(&mut self, id: &EntityId) -> Option<T> {
        self.position(id).map(|i| self.items.remove(i))
    }
}
