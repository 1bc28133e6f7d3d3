//! List and detail views over a collection.
//!
//! A [`ListView`] holds the rows currently shown for one collection. Rows
//! leave the view only after the server confirmed their deletion, and a
//! delete is never sent without an explicit confirmation.

use std::sync::Arc;

use log::info;

use crate::{
    api::{fetch_all, fetch_one, ResourceApi},
    draft::{DestinationDraft, ItineraryDraft, PackageDraft, RomanticPackageDraft},
    error::Result,
    models::{Destination, Document, Filterable, Itinerary, ListFilter, Package, RomanticPackage},
    params::ListResources,
    ports::Confirm,
};

/// Result of a delete request from a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    /// The administrator declined; no request was made
    Cancelled,
}

/// Rows of one collection as shown in the admin list.
pub struct ListView<T> {
    api: Arc<dyn ResourceApi>,
    filter: ListFilter,
    items: Vec<T>,
}

impl<T: Document + Filterable> ListView<T> {
    pub fn new(api: Arc<dyn ResourceApi>, filter: ListFilter) -> Self {
        Self {
            api,
            filter,
            items: Vec::new(),
        }
    }

    pub fn filter(&self) -> &ListFilter {
        &self.filter
    }

    /// Changes the filter; takes effect on the next [`visible`](Self::visible).
    pub fn set_filter(&mut self, filter: ListFilter) {
        self.filter = filter;
    }

    /// Fetches the collection, narrowed server-side by the filter.
    pub async fn load(&mut self) -> Result<()> {
        let params = ListResources {
            destination: self.filter.destination.clone(),
            package_type: self.filter.package_type.as_ref().map(ToString::to_string),
            hotel_rating: self.filter.hotel_rating,
        };
        self.items = fetch_all(self.api.as_ref(), &params).await?;
        Ok(())
    }

    /// Every loaded row.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Loaded rows passing the filter, in server order.
    pub fn visible(&self) -> Vec<&T> {
        self.filter.apply(&self.items)
    }

    /// Deletes a row after asking for confirmation.
    ///
    /// The request is scoped to the row's destination, or to the filter's
    /// when the row is not loaded. The row is removed from the view only once
    /// the server confirmed; on error it stays and the error is returned.
    pub async fn delete(&mut self, id: &str, confirm: &dyn Confirm) -> Result<DeleteOutcome> {
        let label = T::KIND.label().to_lowercase();
        let destination = self
            .items
            .iter()
            .find(|item| item.id() == Some(id))
            .and_then(|item| item.destination())
            .map(String::from)
            .or_else(|| self.filter.destination.clone());

        if !confirm.confirm(&format!("Are you sure you want to delete this {label}?")) {
            return Ok(DeleteOutcome::Cancelled);
        }

        self.api.delete(T::KIND, id, destination.as_deref()).await?;
        self.items.retain(|item| item.id() != Some(id));
        info!("Removed {label} {id} from the list");
        Ok(DeleteOutcome::Deleted)
    }
}

/// Outcome of opening a document for editing.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailOutcome<D> {
    Found(D),
    /// The document is gone; go back to this list route
    RedirectToList(String),
}

/// Documents that can be opened in an edit form.
pub trait Editable: Document {
    type Draft;

    fn to_draft(&self) -> Self::Draft;
}

impl Editable for Package {
    type Draft = PackageDraft;

    fn to_draft(&self) -> PackageDraft {
        PackageDraft::from_package(self)
    }
}

impl Editable for RomanticPackage {
    type Draft = RomanticPackageDraft;

    fn to_draft(&self) -> RomanticPackageDraft {
        RomanticPackageDraft::from_package(self)
    }
}

impl Editable for Itinerary {
    type Draft = ItineraryDraft;

    fn to_draft(&self) -> ItineraryDraft {
        ItineraryDraft::from_itinerary(self)
    }
}

impl Editable for Destination {
    type Draft = DestinationDraft;

    fn to_draft(&self) -> DestinationDraft {
        DestinationDraft::from_destination(self)
    }
}

/// Loads a document into its edit draft; a missing document redirects to
/// the collection's list instead.
pub async fn load_for_edit<T: Editable>(
    api: &dyn ResourceApi,
    id: &str,
    destination: Option<&str>,
) -> Result<DetailOutcome<T::Draft>> {
    match fetch_one::<T>(api, id).await {
        Ok(document) => Ok(DetailOutcome::Found(document.to_draft())),
        Err(e) if e.is_not_found() => {
            info!("{} {id} not found, returning to list", T::KIND.label());
            Ok(DetailOutcome::RedirectToList(T::KIND.list_route(destination)))
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::{
        models::{PackageType, ResourceKind},
        test_support::{FakeApi, FixedConfirm},
    };

    fn romantic(title: &str, package_type: &str, rating: u8) -> serde_json::Value {
        json!({
            "title": title,
            "destination": "bali",
            "price": "₹99,999/-",
            "days": "4 Days",
            "hotelRating": rating,
            "type": package_type,
        })
    }

    #[tokio::test]
    async fn romantic_filter_matches_type_and_rating_exactly() {
        let api = Arc::new(FakeApi::default());
        api.seed(ResourceKind::RomanticPackages, romantic("Honeymoon Villa", "Honeymoon", 5));
        api.seed(ResourceKind::RomanticPackages, romantic("Honeymoon Lite", "Honeymoon", 4));
        api.seed(ResourceKind::RomanticPackages, romantic("Candle Dinner", "Candle Night", 5));
        api.seed(ResourceKind::RomanticPackages, romantic("Family Fun", "Family", 5));
        api.seed(ResourceKind::RomanticPackages, romantic("Legacy Import", "Surf Camp", 5));

        let filter = ListFilter {
            package_type: Some(PackageType::Honeymoon),
            hotel_rating: Some(5),
            ..ListFilter::default()
        }
        .romantic();
        let mut view: ListView<RomanticPackage> = ListView::new(api.clone(), filter);
        view.load().await.expect("list loads");

        let titles: Vec<&str> = view.visible().iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Honeymoon Villa"]);

        view.set_filter(ListFilter::default().romantic());
        let titles: Vec<&str> = view.visible().iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Honeymoon Villa", "Honeymoon Lite", "Candle Dinner"]);
    }

    #[tokio::test]
    async fn declined_delete_sends_nothing() {
        let api = Arc::new(FakeApi::default());
        let id = api.seed(ResourceKind::Packages, json!({"title": "Keep me", "destination": "dubai", "price": "1", "days": "1 Day"}));

        let mut view: ListView<Package> = ListView::new(api.clone(), ListFilter::default());
        view.load().await.expect("list loads");

        let confirm = FixedConfirm::new(false);
        let outcome = view.delete(&id, &confirm).await.expect("no error");

        assert_eq!(outcome, DeleteOutcome::Cancelled);
        assert_eq!(confirm.asked(), vec!["Are you sure you want to delete this package?"]);
        assert!(api.calls().iter().all(|call| !call.starts_with("DELETE")));
        assert_eq!(view.items().len(), 1);
    }

    #[tokio::test]
    async fn confirmed_delete_drops_the_row_after_success() {
        let api = Arc::new(FakeApi::default());
        let id = api.seed(ResourceKind::Packages, json!({"title": "Go", "destination": "dubai", "price": "1", "days": "1 Day"}));
        let mut view: ListView<Package> = ListView::new(api.clone(), ListFilter::default());
        view.load().await.expect("list loads");

        let outcome = view.delete(&id, &FixedConfirm::new(true)).await.expect("deleted");
        assert_eq!(outcome, DeleteOutcome::Deleted);
        assert!(view.items().is_empty());
        assert_eq!(api.calls().last(), Some(&format!("DELETE packages/{id}")));
    }

    #[tokio::test]
    async fn failed_delete_keeps_the_row() {
        let api = Arc::new(FakeApi::default());
        let id = api.seed(ResourceKind::Packages, json!({"title": "Stay", "destination": "dubai", "price": "1", "days": "1 Day"}));
        let mut view: ListView<Package> = ListView::new(api.clone(), ListFilter::default());
        view.load().await.expect("list loads");

        api.fail(ResourceKind::Packages, Some("Delete refused"));
        let err = view
            .delete(&id, &FixedConfirm::new(true))
            .await
            .expect_err("server refused");
        assert_eq!(err.user_message(), "Delete refused");
        assert_eq!(view.items().len(), 1);
    }

    #[tokio::test]
    async fn missing_document_redirects_to_list() {
        let api = FakeApi::default();
        let outcome = load_for_edit::<Itinerary>(&api, "404", Some("vietnam"))
            .await
            .expect("redirect, not error");
        assert_eq!(
            outcome,
            DetailOutcome::RedirectToList("/admin/itineraries?destination=vietnam".into())
        );
    }

    #[tokio::test]
    async fn found_document_becomes_a_draft() {
        let api = FakeApi::default();
        let id = api.seed(
            ResourceKind::Packages,
            json!({
                "title": "Desert Safari",
                "destination": "dubai",
                "price": "₹24,999/-",
                "days": "3 Days",
                "highlights": ["Dune bashing", "BBQ dinner"],
            }),
        );

        let DetailOutcome::Found(draft) = load_for_edit::<Package>(&api, &id, None)
            .await
            .expect("found")
        else {
            panic!("expected a draft");
        };
        assert_eq!(draft.id.as_deref(), Some(id.as_str()));
        assert_eq!(draft.highlights, "Dune bashing • BBQ dinner");
    }
}
