//! Command handlers for the `wf` binary.
//!
//! Each subcommand turns its arguments into a draft, runs it through the
//! [`SubmissionPipeline`] and renders the saved document as a markdown card.

use std::{fmt::Display, sync::Arc};

use anyhow::{bail, Context, Result};
use log::{debug, warn};
use wayfare_core::{
    api::{decode, fetch_all, fetch_home, fetch_one},
    display::{Card, CreateResult, DeleteResult, Documents, OperationStatus, UpdateResult},
    draft::{DayField, DestinationDraft, HomeContentDraft, ItineraryDraft, PackageDraft, RomanticPackageDraft},
    listing::load_for_edit,
    models::{Destination, DestinationTile, Document, Filterable, HomeContent, Itinerary, Package, RomanticPackage},
    params::{DayInput, DeleteResource, HomeFeature, HomeTile, Id, ListResources, PackageFields, RemoveDay},
    submit::{RomanticSubmission, Submittable, SubmitOutcome},
    DeleteOutcome, DetailOutcome, Editable, ListFilter, ListView, ResourceApi, SubmissionPipeline,
};

use crate::{
    cli::{
        CreatePackageArgs, DestinationCommands, HomeCommands, ItineraryCommands, PackageCommands,
        RemoveTileArgs,
    },
    prompt::{TerminalConfirm, TerminalNotifier},
    renderer::TerminalRenderer,
};

pub struct Cli {
    api: Arc<dyn ResourceApi>,
    pipeline: SubmissionPipeline,
    renderer: TerminalRenderer,
}

/// Unwraps a submission into the saved document.
///
/// The pipeline has already told the user what went wrong through the
/// notifier, so failures only need a short summary here.
fn saved<T: Document>(outcome: SubmitOutcome) -> Result<T> {
    match outcome {
        SubmitOutcome::Redirect {
            location, document, ..
        } => {
            debug!("Saved, list view is {location}");
            Ok(decode(document)?)
        }
        SubmitOutcome::Invalid(_) | SubmitOutcome::Failed { .. } => {
            bail!("{} was not saved", T::KIND.label())
        }
        SubmitOutcome::Busy => bail!("Another submission is still in progress"),
    }
}

fn describe_changes(fields: &PackageFields) -> Vec<String> {
    let text_fields = [
        ("Title", &fields.title),
        ("Destination", &fields.destination),
        ("Location", &fields.location),
        ("Price", &fields.price),
        ("Duration", &fields.days),
        ("Image", &fields.image),
        ("Type", &fields.package_type),
        ("Highlights", &fields.highlights),
        ("Category", &fields.category),
    ];

    let mut changes: Vec<String> = text_fields
        .into_iter()
        .filter_map(|(name, value)| value.as_ref().map(|v| format!("{name}: {v}")))
        .collect();

    if let Some(rating) = fields.hotel_rating {
        changes.push(format!("Hotel rating: {rating}"));
    }
    if !fields.features.is_empty() {
        changes.push(format!("Features: {}", fields.features.join(", ")));
    }
    changes
}

/// Appends a day filled from the command line to the draft.
fn append_day(draft: ItineraryDraft, input: DayInput) -> ItineraryDraft {
    let DayInput {
        title,
        activities,
        meals,
        accommodation,
    } = input;

    let mut draft = draft.add_day();
    let index = draft.days.len().saturating_sub(1);

    draft = draft.update_day(index, DayField::Title(title));
    if let Some(accommodation) = accommodation {
        draft = draft.update_day(index, DayField::Accommodation(accommodation));
    }
    for (at, activity) in activities.into_iter().enumerate() {
        if at > 0 {
            draft = draft.add_activity(index);
        }
        draft = draft.update_day(index, DayField::Activity(at, activity));
    }
    for (at, meal) in meals.into_iter().enumerate() {
        draft = draft.add_meal(index).update_day(index, DayField::Meal(at, meal));
    }
    draft
}

impl Cli {
    pub fn new(api: Arc<dyn ResourceApi>, renderer: TerminalRenderer) -> Self {
        let pipeline = SubmissionPipeline::new(api.clone(), Arc::new(TerminalNotifier));
        Self {
            api,
            pipeline,
            renderer,
        }
    }

    pub async fn handle_package_command(&self, command: PackageCommands) -> Result<()> {
        match command {
            PackageCommands::List(args) => self.list::<Package>(args.into(), false).await,
            PackageCommands::Show(args) => self.show::<Package>(&Id::from(args).id).await,
            PackageCommands::Create(CreatePackageArgs {
                destination,
                fields,
                with_itinerary,
            }) => {
                if with_itinerary {
                    warn!("--with-itinerary only applies to romantic packages, ignoring it");
                }
                let draft = PackageDraft::for_destination(&destination).apply(fields.into_fields(None));
                self.create(&draft).await
            }
            PackageCommands::Update(args) => {
                let (Id { id }, fields) = args.into();
                let changes = describe_changes(&fields);
                let draft = self.open::<Package>(&id).await?.apply(fields);
                self.update(&draft, changes).await
            }
            PackageCommands::Delete(args) => self.delete::<Package>(args.into()).await,
        }
    }

    pub async fn handle_romantic_command(&self, command: PackageCommands) -> Result<()> {
        match command {
            PackageCommands::List(args) => self.list::<RomanticPackage>(args.into(), true).await,
            PackageCommands::Show(args) => self.show::<RomanticPackage>(&Id::from(args).id).await,
            PackageCommands::Create(CreatePackageArgs {
                destination,
                fields,
                with_itinerary,
            }) => {
                let draft = RomanticPackageDraft::for_destination(&destination)
                    .apply(fields.into_fields(None))
                    .with_itinerary(with_itinerary);
                self.create_romantic(&draft).await
            }
            PackageCommands::Update(args) => {
                let (Id { id }, fields) = args.into();
                let changes = describe_changes(&fields);
                let draft = self.open::<RomanticPackage>(&id).await?.apply(fields);
                self.update(&draft, changes).await
            }
            PackageCommands::Delete(args) => self.delete::<RomanticPackage>(args.into()).await,
        }
    }

    pub async fn handle_itinerary_command(&self, command: ItineraryCommands) -> Result<()> {
        match command {
            ItineraryCommands::List(args) => {
                let mut params: ListResources = args.into();
                params.package_type = None;
                self.list::<Itinerary>(params, false).await
            }
            ItineraryCommands::Show(args) => self.show::<Itinerary>(&Id::from(args).id).await,
            ItineraryCommands::Create(args) => {
                let text = std::fs::read_to_string(&args.file)
                    .with_context(|| format!("Failed to read {}", args.file.display()))?;
                let draft: ItineraryDraft = serde_json::from_str(&text)
                    .with_context(|| format!("{} is not an itinerary draft", args.file.display()))?;
                self.create(&draft).await
            }
            ItineraryCommands::AddDay(args) => {
                let (Id { id }, input) = args.into();
                let change = format!("Added day: {}", input.title);
                let draft = append_day(self.open::<Itinerary>(&id).await?, input);
                self.update(&draft, vec![change]).await
            }
            ItineraryCommands::RemoveDay(args) => {
                let RemoveDay { id, day } = args.into();
                let draft = self.open::<Itinerary>(&id).await?;
                let Some(index) = (day as usize)
                    .checked_sub(1)
                    .filter(|index| *index < draft.days.len())
                else {
                    bail!("Itinerary {id} has no day {day}");
                };
                self.update(&draft.remove_day(index), vec![format!("Removed day {day}")])
                    .await
            }
            ItineraryCommands::Delete(args) => self.delete::<Itinerary>(args.into()).await,
        }
    }

    pub async fn handle_destination_command(&self, command: DestinationCommands) -> Result<()> {
        match command {
            DestinationCommands::List => {
                let destinations: Vec<Destination> =
                    fetch_all(self.api.as_ref(), &ListResources::default()).await?;
                self.renderer.render(&Documents(destinations).to_string())
            }
            DestinationCommands::Add(args) => {
                let draft = DestinationDraft::new().apply(args.into());
                self.create(&draft).await
            }
            DestinationCommands::Delete(args) => self.delete::<Destination>(args.into()).await,
        }
    }

    pub async fn handle_home_command(&self, command: HomeCommands) -> Result<()> {
        match command {
            HomeCommands::Show => {
                let content = fetch_home(self.api.as_ref()).await?;
                self.renderer.render(&content.to_string())
            }
            HomeCommands::Feature(args) => {
                let HomeFeature {
                    destination,
                    package_id,
                } = args.into();
                self.save_home(|draft| draft.feature(&destination, &package_id))
                    .await
            }
            HomeCommands::Unfeature(args) => {
                let HomeFeature {
                    destination,
                    package_id,
                } = args.into();
                self.save_home(|draft| draft.unfeature(&destination, &package_id))
                    .await
            }
            HomeCommands::AddTile(args) => {
                let HomeTile {
                    destination,
                    name,
                    image,
                    link,
                } = args.into();
                let tile = DestinationTile {
                    name,
                    image: image.unwrap_or_default(),
                    link: link.unwrap_or_default(),
                };
                self.save_home(|draft| draft.add_tile(&destination, tile))
                    .await
            }
            HomeCommands::RemoveTile(args) => self.remove_tile(args).await,
        }
    }

    /// Lists packages of every destination.
    pub async fn list_packages(&self) -> Result<()> {
        self.list::<Package>(ListResources::default(), false).await
    }

    async fn list<T>(&self, params: ListResources, romantic_only: bool) -> Result<()>
    where
        T: Document + Filterable + Card,
    {
        let mut filter = ListFilter::from(&params);
        if romantic_only {
            filter = filter.romantic();
        }

        let mut view: ListView<T> = ListView::new(self.api.clone(), filter);
        view.load().await?;
        let documents = Documents(view.visible().into_iter().cloned().collect());
        self.renderer.render(&documents.to_string())
    }

    async fn show<T: Document + Display>(&self, id: &str) -> Result<()> {
        let document: T = fetch_one(self.api.as_ref(), id).await?;
        self.renderer.render(&document.to_string())
    }

    /// Loads a document into its edit draft.
    async fn open<T: Editable>(&self, id: &str) -> Result<T::Draft> {
        match load_for_edit::<T>(self.api.as_ref(), id, None).await? {
            DetailOutcome::Found(draft) => Ok(draft),
            DetailOutcome::RedirectToList(route) => {
                debug!("Nothing to edit, list view is {route}");
                bail!("{} with ID {id} not found", T::KIND.label())
            }
        }
    }

    async fn create<D>(&self, draft: &D) -> Result<()>
    where
        D: Submittable,
        D::Output: Display,
    {
        let document: D::Output = saved(self.pipeline.submit(draft).await)?;
        self.renderer.render(&CreateResult::new(document).to_string())
    }

    async fn create_romantic(&self, draft: &RomanticPackageDraft) -> Result<()> {
        let RomanticSubmission { outcome, saga } = self.pipeline.submit_romantic(draft).await;
        let package: RomanticPackage = saved(outcome)?;
        self.renderer.render(&CreateResult::new(package).to_string())?;

        if let Some(saga) = saga {
            let status = saga.finished().await;
            self.renderer.render_status(&OperationStatus::from(&status))?;
        }
        Ok(())
    }

    async fn update<D>(&self, draft: &D, changes: Vec<String>) -> Result<()>
    where
        D: Submittable,
        D::Output: Display,
    {
        let document: D::Output = saved(self.pipeline.submit(draft).await)?;
        self.renderer
            .render(&UpdateResult::with_changes(document, changes).to_string())
    }

    async fn delete<T: Document + Card + Filterable>(&self, params: DeleteResource) -> Result<()> {
        let DeleteResource {
            id,
            destination,
            confirmed,
        } = params;
        let document: T = fetch_one(self.api.as_ref(), &id).await?;

        let filter = destination
            .as_deref()
            .or(document.destination())
            .map(ListFilter::for_destination)
            .unwrap_or_default();
        let mut view: ListView<T> = ListView::new(self.api.clone(), filter);

        match view.delete(&id, &TerminalConfirm::new(confirmed)).await? {
            DeleteOutcome::Cancelled => self
                .renderer
                .render_status(&OperationStatus::warning("Deletion cancelled")),
            DeleteOutcome::Deleted => self.renderer.render(&DeleteResult::new(document).to_string()),
        }
    }

    async fn save_home<F>(&self, edit: F) -> Result<()>
    where
        F: FnOnce(HomeContentDraft) -> HomeContentDraft,
    {
        let content = fetch_home(self.api.as_ref()).await?;
        let draft = edit(HomeContentDraft::from_content(content));
        let saved: HomeContent = saved(self.pipeline.save_home(&draft).await)?;
        self.renderer.render(&saved.to_string())
    }

    async fn remove_tile(&self, args: RemoveTileArgs) -> Result<()> {
        let RemoveTileArgs {
            destination,
            position,
        } = args;
        let content = fetch_home(self.api.as_ref()).await?;
        let tiles = content
            .destinations
            .get(&destination.trim().to_lowercase())
            .map_or(0, |section| section.top_destinations.len());

        let Some(index) = position.checked_sub(1).filter(|index| *index < tiles) else {
            bail!("{destination} has no tile {position}");
        };

        let draft = HomeContentDraft::from_content(content).remove_tile(&destination, index);
        let saved: HomeContent = saved(self.pipeline.save_home(&draft).await)?;
        self.renderer.render(&saved.to_string())
    }
}
