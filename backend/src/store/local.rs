use serde::{de::DeserializeOwned, Serialize};

use super::{Collection, Store};
use crate::error::DairyResult;
use crate::models::{
    Announcement, AttendanceRecord, Bill, Delivery, Entity, Feedback, Message, Payment, Review,
    Stored, Task, Vehicle,
};
use crate::validation::FormInput;

/// A page-local record: a self-contained list with no cross-entity rules,
/// managed through the same add/update/delete contract as everything else.
pub trait LocalRecord:
    Entity + FormInput + Clone + Serialize + DeserializeOwned + Send + Sync + 'static
{
    fn collection(store: &Store) -> &Collection<Self>;
    fn collection_mut(store: &mut Store) -> &mut Collection<Self>;
}

macro_rules! local_record {
    ($ty:ty, $field:ident) => {
        impl LocalRecord for $ty {
            fn collection(store: &Store) -> &Collection<Self> {
                &store.$field
            }

            fn collection_mut(store: &mut Store) -> &mut Collection<Self> {
                &mut store.$field
            }
        }
    };
}

local_record!(Vehicle, vehicles);
local_record!(Delivery, deliveries);
local_record!(Message, messages);
local_record!(Announcement, announcements);
local_record!(Payment, payments);
local_record!(Bill, bills);
local_record!(Review, reviews);
local_record!(Feedback, feedback);
local_record!(AttendanceRecord, attendance);
local_record!(Task, tasks);

impl Store {
    pub fn list<T: LocalRecord>(&self) -> &Collection<T> {
        T::collection(self)
    }

    pub fn add<T: LocalRecord>(&mut self, record: T) -> Stored<T> {
        let stored = T::collection_mut(self).append(record).clone();
        tracing::info!("{} {} added", T::NAME, stored.id);
        stored
    }

    pub fn update<T: LocalRecord>(&mut self, id: &str, record: T) -> DairyResult<Stored<T>> {
        Ok(T::collection_mut(self).replace(id, record)?.clone())
    }

    pub fn delete<T: LocalRecord>(&mut self, id: &str) -> DairyResult<Stored<T>> {
        let removed = T::collection_mut(self).remove(id)?;
        tracing::info!("{} {} deleted", T::NAME, id);
        Ok(removed)
    }
}
