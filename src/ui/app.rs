use crate::capture::{self, CaptureError, ImagePayload};
use crate::domain::{DietaryRestriction, Recipe, ShoppingItem};
use crate::gateway::GatewayError;
use crate::ui::cooking::{CookingIntent, CookingReducer, CookingState, CookingView};
use crate::ui::mvi::Reducer;
use crate::ui::pantry::{PantryIntent, PantryReducer, PantryState};
use crate::ui::shopping::{ShoppingIntent, ShoppingListState, ShoppingReducer};
use std::path::Path;
use std::time::SystemTime;
use tokio::sync::mpsc;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Tab {
    #[default]
    Fridge,
    Recipes,
    Shopping,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Fridge, Tab::Recipes, Tab::Shopping];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Fridge => "My Fridge",
            Tab::Recipes => "Recipes",
            Tab::Shopping => "Shopping List",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Tab::Fridge => Tab::Recipes,
            Tab::Recipes => Tab::Shopping,
            Tab::Shopping => Tab::Fridge,
        }
    }
}

/// Work the UI hands to the gateway worker.
#[derive(Debug)]
pub enum UiCommand {
    DetectIngredients {
        image: ImagePayload,
    },
    GenerateRecipes {
        request_id: u64,
        ingredients: Vec<String>,
        restriction: DietaryRestriction,
    },
    SpeakStep {
        text: String,
    },
}

pub type UiCommandSender = mpsc::Sender<UiCommand>;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Session state of the kitchen. Owns every feature state and is the only
/// place that turns state changes into gateway commands.
pub struct App {
    should_quit: bool,
    tab: Tab,
    /// Ingredients, dietary filter, recipes and busy tracking (MVI pattern).
    pantry: PantryState,
    /// Selected recipe and step walker (MVI pattern).
    cooking: CookingState,
    /// Shopping list (MVI pattern).
    shopping: ShoppingListState,
    /// Text of the image path prompt while it is open.
    path_input: Option<String>,
    command_sender: Option<UiCommandSender>,
    next_request_id: u64,
    /// `(ingredients_revision, dietary)` of the last generation request.
    last_generation_key: Option<(u64, DietaryRestriction)>,
    credential_configured: bool,
    last_error: Option<String>,
    ticks: usize,
}

impl App {
    pub fn new(credential_configured: bool) -> Self {
        Self {
            should_quit: false,
            tab: Tab::default(),
            pantry: PantryState::default(),
            cooking: CookingState::default(),
            shopping: ShoppingListState::default(),
            path_input: None,
            command_sender: None,
            next_request_id: 0,
            last_generation_key: None,
            credential_configured,
            last_error: None,
            ticks: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn on_tick(&mut self) {
        self.ticks = self.ticks.wrapping_add(1);
    }

    /// Tick counter driving the busy spinner.
    pub fn ticks(&self) -> usize {
        self.ticks
    }

    pub fn set_command_sender(&mut self, sender: UiCommandSender) {
        self.command_sender = Some(sender);
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn set_tab(&mut self, tab: Tab) {
        self.tab = tab;
    }

    pub fn pantry(&self) -> &PantryState {
        &self.pantry
    }

    pub fn cooking(&self) -> &CookingState {
        &self.cooking
    }

    pub fn shopping(&self) -> &ShoppingListState {
        &self.shopping
    }

    /// True while a detection or generation call is outstanding.
    pub fn is_busy(&self) -> bool {
        self.pantry.is_busy()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Header status text.
    pub fn status_line(&self) -> &'static str {
        if !self.credential_configured {
            "API key missing"
        } else if self.is_busy() {
            "Analyzing..."
        } else {
            "AI Kitchen Ready"
        }
    }

    pub fn is_credential_configured(&self) -> bool {
        self.credential_configured
    }

    // ========================================================================
    // Image capture and detection
    // ========================================================================

    /// Hand an image to the gateway for ingredient detection.
    ///
    /// Does not refuse while busy; the busy overlay only blocks keys.
    pub fn capture_image(&mut self, image: ImagePayload) {
        tracing::info!(
            mime_type = %image.mime_type,
            encoded_bytes = image.data.len(),
            "Image captured"
        );
        if self.send_command(UiCommand::DetectIngredients { image }) {
            self.dispatch_pantry(PantryIntent::DetectionStarted);
        }
    }

    /// File picker equivalent: read the image at `path`.
    pub fn capture_from_path(&mut self, path: &Path) {
        let result = capture::capture_file(path);
        self.apply_capture(result);
    }

    /// Drag-and-drop equivalent: the terminal pastes the dropped file's path.
    pub fn on_paste(&mut self, text: &str) {
        if let Some(input) = self.path_input.as_mut() {
            input.push_str(text.trim_end_matches(['\r', '\n']));
            return;
        }
        if self.cooking.is_open() || self.tab != Tab::Fridge {
            return;
        }
        let result = capture::capture_pasted(text);
        self.apply_capture(result);
    }

    pub fn on_image_paste(&mut self) {
        let result = capture::capture_clipboard();
        self.apply_capture(result);
    }

    fn apply_capture(&mut self, result: Result<Option<ImagePayload>, CaptureError>) {
        match result {
            Ok(Some(image)) => self.capture_image(image),
            Ok(None) => tracing::debug!("No image to capture"),
            Err(err) => {
                tracing::warn!("Image capture failed: {}", err);
                self.last_error = Some(err.to_string());
            }
        }
    }

    /// Detection answered. A failure counts as an empty result.
    pub fn on_ingredients_detected(&mut self, result: Result<Vec<String>, GatewayError>) {
        let ingredients = self.unwrap_or_empty(result, "Error analyzing image");
        tracing::info!(count = ingredients.len(), "Ingredients detected");
        self.dispatch_pantry(PantryIntent::IngredientsDetected { ingredients });
        self.tab = Tab::Recipes;
        self.sync_recipes();
    }

    /// Generation answered. Stale answers only release their busy slot and
    /// leave `last_error` alone.
    pub fn on_recipes_generated(
        &mut self,
        request_id: u64,
        result: Result<Vec<Recipe>, GatewayError>,
    ) {
        if request_id < self.pantry.latest_request {
            let outcome = result.as_ref().map_or_else(GatewayError::kind, |_| "ok");
            tracing::debug!(
                request_id,
                latest = self.pantry.latest_request,
                outcome,
                "Discarding stale recipe response"
            );
            self.dispatch_pantry(PantryIntent::RecipesGenerated {
                request_id,
                recipes: Vec::new(),
            });
            return;
        }

        let recipes = self.unwrap_or_empty(result, "Error generating recipes");
        tracing::info!(request_id, count = recipes.len(), "Recipes generated");
        self.dispatch_pantry(PantryIntent::RecipesGenerated {
            request_id,
            recipes,
        });
    }

    fn unwrap_or_empty<T>(&mut self, result: Result<Vec<T>, GatewayError>, context: &str) -> Vec<T> {
        match result {
            Ok(items) => items,
            Err(err) => {
                tracing::warn!(kind = err.kind(), "{}: {}", context, err);
                self.last_error = Some(format!("{} ({})", context, err.kind()));
                Vec::new()
            }
        }
    }

    // ========================================================================
    // Ingredients and dietary filter
    // ========================================================================

    pub fn clear_ingredients(&mut self) {
        self.dispatch_pantry(PantryIntent::ClearIngredients);
        self.sync_recipes();
    }

    pub fn set_dietary(&mut self, restriction: DietaryRestriction) {
        self.dispatch_pantry(PantryIntent::SetDietary { restriction });
        self.sync_recipes();
    }

    pub fn cycle_dietary(&mut self, forward: bool) {
        let current = self.pantry.dietary;
        let next = if forward {
            current.next()
        } else {
            current.previous()
        };
        self.set_dietary(next);
    }

    /// Change detection over `(ingredients, filter)`.
    ///
    /// Requests recipes once per committed change while ingredients are
    /// non-empty. An empty list never requests and leaves recipes untouched.
    fn sync_recipes(&mut self) {
        let key = self.pantry.generation_key();
        if self.last_generation_key == Some(key) || !self.pantry.has_ingredients() {
            return;
        }

        let request_id = self.next_request_id + 1;
        let command = UiCommand::GenerateRecipes {
            request_id,
            ingredients: self.pantry.ingredients.clone(),
            restriction: self.pantry.dietary,
        };
        if !self.send_command(command) {
            return;
        }
        self.next_request_id = request_id;
        self.last_generation_key = Some(key);
        tracing::info!(
            request_id,
            ingredients = self.pantry.ingredients.len(),
            restriction = %self.pantry.dietary,
            "Requesting recipes"
        );
        self.dispatch_pantry(PantryIntent::RecipesRequested { request_id });
    }

    /// Dispatch an intent to the pantry reducer.
    fn dispatch_pantry(&mut self, intent: PantryIntent) {
        dispatch_mvi!(self, pantry, PantryReducer, intent);
    }

    pub fn move_recipe_cursor(&mut self, direction: i32) {
        let intent = if direction < 0 {
            PantryIntent::MoveUp
        } else {
            PantryIntent::MoveDown
        };
        self.dispatch_pantry(intent);
    }

    // ========================================================================
    // Cooking mode
    // ========================================================================

    /// Select a recipe and open cooking mode. Re-selecting is a no-op.
    pub fn select_recipe(&mut self, recipe: Recipe) {
        tracing::debug!(recipe_id = %recipe.id, "Recipe selected");
        self.dispatch_cooking(CookingIntent::Open { recipe });
    }

    pub fn select_highlighted_recipe(&mut self) {
        if let Some(recipe) = self.pantry.highlighted_recipe().cloned() {
            self.select_recipe(recipe);
        }
    }

    /// Clears the selection. The recipe list is left as is.
    pub fn close_cooking(&mut self) {
        self.dispatch_cooking(CookingIntent::Close);
    }

    pub fn dispatch_cooking(&mut self, intent: CookingIntent) {
        dispatch_mvi!(self, cooking, CookingReducer, intent);
    }

    /// Narrate the current step. Ignored while a narration is pending.
    pub fn narrate_current_step(&mut self) {
        if self.cooking.is_reading() {
            return;
        }
        let Some(text) = self.cooking.current_step_text().map(str::to_string) else {
            return;
        };
        if self.send_command(UiCommand::SpeakStep { text }) {
            self.dispatch_cooking(CookingIntent::NarrationStarted);
        }
    }

    pub fn on_narration_finished(&mut self) {
        self.dispatch_cooking(CookingIntent::NarrationFinished);
    }

    /// Add the ingredient under the checklist cursor to the shopping list.
    pub fn add_checklist_item_to_shopping(&mut self) -> Option<String> {
        let CookingState::Open {
            recipe,
            view: CookingView::Checklist,
            checklist_cursor,
            ..
        } = &self.cooking
        else {
            return None;
        };
        let ingredient = recipe.ingredients.get(*checklist_cursor)?.clone();
        Some(self.add_shopping_item(&ingredient.name, &ingredient.quantity))
    }

    // ========================================================================
    // Shopping list
    // ========================================================================

    /// Append an item with a fresh id and timestamp. Returns the id.
    pub fn add_shopping_item(&mut self, name: &str, quantity: &str) -> String {
        let item = ShoppingItem {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.to_string(),
            quantity: quantity.to_string(),
            added_at: SystemTime::now(),
        };
        let id = item.id.clone();
        tracing::debug!(item_id = %id, name, "Added to shopping list");
        self.dispatch_shopping(ShoppingIntent::Add { item });
        id
    }

    pub fn remove_shopping_item(&mut self, id: &str) {
        self.dispatch_shopping(ShoppingIntent::Remove { id: id.to_string() });
    }

    pub fn remove_focused_shopping_item(&mut self) {
        if let Some(id) = self.shopping.focused_item().map(|item| item.id.clone()) {
            self.remove_shopping_item(&id);
        }
    }

    pub fn clear_shopping(&mut self) {
        self.dispatch_shopping(ShoppingIntent::Clear);
    }

    pub fn dispatch_shopping(&mut self, intent: ShoppingIntent) {
        dispatch_mvi!(self, shopping, ShoppingReducer, intent);
    }

    // ========================================================================
    // Image path prompt
    // ========================================================================

    pub fn path_input(&self) -> Option<&str> {
        self.path_input.as_deref()
    }

    pub fn open_path_prompt(&mut self) {
        self.path_input = Some(String::new());
    }

    pub fn cancel_path_prompt(&mut self) {
        self.path_input = None;
    }

    pub fn push_path_char(&mut self, ch: char) {
        if let Some(input) = self.path_input.as_mut() {
            input.push(ch);
        }
    }

    pub fn pop_path_char(&mut self) {
        if let Some(input) = self.path_input.as_mut() {
            input.pop();
        }
    }

    /// Close the prompt and capture the typed path. Blank input is a no-op.
    pub fn submit_path_prompt(&mut self) {
        let Some(input) = self.path_input.take() else {
            return;
        };
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return;
        }
        let result = capture::capture_pasted(trimmed);
        self.apply_capture(result);
    }

    fn send_command(&mut self, command: UiCommand) -> bool {
        let Some(sender) = &self.command_sender else {
            tracing::warn!("No gateway worker attached; dropping {}", command_name(&command));
            return false;
        };

        match sender.try_send(command) {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!("Gateway command send failed: {}", err);
                self.last_error = Some(format!("Worker unavailable: {}", err));
                false
            }
        }
    }
}

fn command_name(command: &UiCommand) -> &'static str {
    match command {
        UiCommand::DetectIngredients { .. } => "detect",
        UiCommand::GenerateRecipes { .. } => "generate",
        UiCommand::SpeakStep { .. } => "speak",
    }
}
