//! Repeating-group form controller for family-group registration.
//!
//! Owns the group scalars, an ordered list of person rows, and the dependent
//! lookup lists. Each row pairs a person with its validation messages, so the
//! people list and the error list cannot drift apart: any sequence of add,
//! remove, load, and reset leaves them the same length by construction.
//!
//! Every operation takes `&mut self`, so one controller instance can have at
//! most one request in flight; a second submit cannot start while the first
//! is pending.

use crate::api::FamilyGroupStore;
use crate::errors::ApiError;
use crate::models::{FamilyGroup, GroupErrors, GroupHead, LookupItem, Person, PersonErrors};

/// One person in the form together with its validation messages.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PersonRow {
    pub person: Person,
    pub errors: PersonErrors,
}

/// Result of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Stored; the form has been reset and the parent list refreshed.
    Saved,
    /// Stored; the server asked the client to navigate to this URL.
    Redirect(String),
    /// Rejected by validation; the error bags now hold the messages.
    Rejected,
}

/// Controller for one family-group form instance.
///
/// The persistence collaborator `S` is injected at construction; production
/// code passes an [`crate::api::ApiClient`], tests pass an in-memory double.
pub struct FamilyGroupForm<S> {
    store: S,
    head: GroupHead,
    rows: Vec<PersonRow>,
    /// Scalar field messages; per-person messages live in the rows.
    errors: GroupErrors,
    vote_types: Vec<LookupItem>,
    relationships: Vec<LookupItem>,
    buildings: Vec<LookupItem>,
    genders: Vec<LookupItem>,
    /// Options for the currently selected building only; empty otherwise.
    departments: Vec<LookupItem>,
    /// Department selection waiting for its building's option list to load.
    pending_department: Option<i64>,
    /// Parent list view rows, refreshed after an in-place save.
    groups: Vec<FamilyGroup>,
}

impl<S: FamilyGroupStore> FamilyGroupForm<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            head: GroupHead::default(),
            rows: Vec::new(),
            errors: GroupErrors::default(),
            vote_types: Vec::new(),
            relationships: Vec::new(),
            buildings: Vec::new(),
            genders: Vec::new(),
            departments: Vec::new(),
            pending_department: None,
            groups: Vec::new(),
        }
    }

    /// Fetch the static lookup lists. Departments stay empty until a
    /// building is chosen. Lists fetched before a failure are kept.
    pub async fn init(&mut self) -> Result<(), ApiError> {
        self.vote_types = self.store.vote_types().await?;
        self.relationships = self.store.relationships().await?;
        self.buildings = self.store.buildings().await?;
        self.genders = self.store.genders().await?;
        Ok(())
    }

    /// Load an existing group for editing. `None` keeps the form in create
    /// mode. On fetch failure nothing is merged; the form stays as it was.
    pub async fn load(&mut self, group_id: Option<i64>) -> Result<(), ApiError> {
        let Some(id) = group_id else {
            return Ok(());
        };
        let detail = self.store.family_group_detail(id).await?;
        tracing::debug!("Loaded family group {} with {} people", id, detail.people.len());

        self.head = detail.head;
        self.rows = detail
            .people
            .into_iter()
            .map(|person| PersonRow {
                person,
                errors: PersonErrors::default(),
            })
            .collect();

        // The department options do not exist until the building is known;
        // stash the stored selection and commit it once the list has loaded.
        self.pending_department = self.head.department_id.take();
        let building = self.head.building_id;
        self.set_building(building).await
    }

    /// Append one person with default field values, together with its empty
    /// error bag, as a single step.
    pub fn add_person(&mut self) {
        self.rows.push(PersonRow::default());
    }

    /// Remove the person at `index`. A person already on the server is
    /// deleted there first and the row is kept if that fails. Returns
    /// `Ok(false)` for an out-of-range index.
    pub async fn remove_person(&mut self, index: usize) -> Result<bool, ApiError> {
        let Some(row) = self.rows.get(index) else {
            return Ok(false);
        };
        if let Some(person_id) = row.person.id {
            self.store.delete_person(person_id).await?;
            tracing::debug!("Deleted person {}", person_id);
        }
        self.rows.remove(index);
        Ok(true)
    }

    /// Blank the record: head scalars back to defaults, people cleared (the
    /// rows carry their error bags with them). Scalar error messages and the
    /// lookup lists are left as they are.
    pub fn reset(&mut self) {
        self.head = GroupHead::default();
        self.rows.clear();
    }

    /// Change the selected building. The previous department list and
    /// selection are invalidated before the new list is fetched; a pending
    /// department from [`load`](Self::load) is committed once it arrives.
    pub async fn set_building(&mut self, building: Option<i64>) -> Result<(), ApiError> {
        self.head.building_id = building;
        self.departments.clear();
        self.head.department_id = None;

        let Some(building_id) = building else {
            self.pending_department = None;
            return Ok(());
        };

        self.departments = self.store.departments_for(building_id).await?;
        if let Some(department_id) = self.pending_department.take() {
            self.head.department_id = Some(department_id);
        }
        Ok(())
    }

    /// Send the whole record. Routes to the update endpoint when the head
    /// carries a server id, the create endpoint otherwise. Validation
    /// rejections replace all error bags wholesale and yield
    /// [`SubmitOutcome::Rejected`]; transport errors propagate untouched.
    pub async fn submit(&mut self) -> Result<SubmitOutcome, ApiError> {
        let record = self.to_record();
        let result = match self.head.id {
            Some(id) => self.store.update_family_group(id, &record).await,
            None => self.store.create_family_group(&record).await,
        };

        match result {
            Ok(outcome) => {
                self.clear_errors();
                if let Some(url) = outcome.redirect {
                    tracing::info!("Record stored; server redirects to {}", url);
                    return Ok(SubmitOutcome::Redirect(url));
                }
                self.reset();
                self.groups = self.store.family_groups().await?;
                Ok(SubmitOutcome::Saved)
            }
            Err(ApiError::Validation(bag)) => {
                tracing::debug!("Record rejected by validation");
                self.apply_errors(bag);
                Ok(SubmitOutcome::Rejected)
            }
            Err(err) => Err(err),
        }
    }

    /// Assemble the wire record from the head and the rows.
    fn to_record(&self) -> FamilyGroup {
        FamilyGroup {
            head: self.head.clone(),
            people: self.rows.iter().map(|row| row.person.clone()).collect(),
        }
    }

    /// Wholesale replacement: scalar bag swapped, row `i` takes payload
    /// entry `i` or becomes empty. Extra payload entries are dropped.
    fn apply_errors(&mut self, mut bag: GroupErrors) {
        let people = bag.take_people();
        for (index, row) in self.rows.iter_mut().enumerate() {
            row.errors = people.get(index).cloned().unwrap_or_default();
        }
        self.errors = bag;
    }

    fn clear_errors(&mut self) {
        self.errors = GroupErrors::default();
        for row in &mut self.rows {
            row.errors = PersonErrors::default();
        }
    }

    // Accessors.

    pub fn head(&self) -> &GroupHead {
        &self.head
    }

    /// Mutable access to the scalar fields. Building changes should go
    /// through [`set_building`](Self::set_building) so the department list
    /// stays in step.
    pub fn head_mut(&mut self) -> &mut GroupHead {
        &mut self.head
    }

    pub fn rows(&self) -> &[PersonRow] {
        &self.rows
    }

    pub fn person_mut(&mut self, index: usize) -> Option<&mut Person> {
        self.rows.get_mut(index).map(|row| &mut row.person)
    }

    /// Scalar validation messages.
    pub fn errors(&self) -> &GroupErrors {
        &self.errors
    }

    pub fn vote_types(&self) -> &[LookupItem] {
        &self.vote_types
    }

    pub fn relationships(&self) -> &[LookupItem] {
        &self.relationships
    }

    pub fn buildings(&self) -> &[LookupItem] {
        &self.buildings
    }

    pub fn genders(&self) -> &[LookupItem] {
        &self.genders
    }

    pub fn departments(&self) -> &[LookupItem] {
        &self.departments
    }

    pub fn groups(&self) -> &[FamilyGroup] {
        &self.groups
    }

    /// How many rows are flagged as family head. Exclusivity is advisory;
    /// callers may warn when this exceeds one.
    pub fn family_head_count(&self) -> usize {
        self.rows.iter().filter(|row| row.person.family_head).count()
    }
}
