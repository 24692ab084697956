use pitchside::prelude::*;

fn fixture_store() -> InMemDocumentStore {
  let mut store = InMemDocumentStore::new();

  store.upsert(
    SearchDocument::new(EntityKind::Player, "p1", "erling-haaland", "Erling Haaland")
      .with_subtitle("Manchester City")
      .with_meta("Forward, Norway")
      .with_popularity(88.0),
  );
  store.upsert(
    SearchDocument::new(EntityKind::Player, "p2", "kevin-de-bruyne", "Kevin De Bruyne")
      .with_subtitle("Manchester City")
      .with_meta("Midfielder, Belgium")
      .with_popularity(91.0),
  );
  store.upsert(
    SearchDocument::new(EntityKind::Player, "p3", "ngolo-kante", "N'Golo Kanté")
      .with_subtitle("Al-Ittihad")
      .with_meta("Midfielder, France")
      .with_popularity(75.0),
  );
  store.upsert(
    SearchDocument::new(EntityKind::Team, "t1", "manchester-city", "Manchester City")
      .with_subtitle("Premier League"),
  );
  store.upsert(
    SearchDocument::new(EntityKind::Team, "t2", "manchester-united", "Manchester United")
      .with_subtitle("Premier League"),
  );
  store.upsert(
    SearchDocument::new(
      EntityKind::Competition,
      "c1",
      "premier-league",
      "Premier League",
    )
    .with_subtitle("England"),
  );
  store.upsert(
    SearchDocument::new(EntityKind::Venue, "v1", "etihad-stadium", "Etihad Stadium")
      .with_subtitle("Manchester City"),
  );

  store
}

fn fixture_engine() -> SearchEngine {
  SearchEngine::new(Box::new(fixture_store()))
}

#[test]
fn scenario_a_player_query_ranks_the_player_first() {
  let engine = fixture_engine();
  let results = engine.search(&SearchRequest::new("Haaland")).unwrap();

  assert!(!results.is_empty());
  assert_eq!(results[0].name, "Erling Haaland");
  assert_eq!(results[0].entity_kind, EntityKind::Player);
}

#[test]
fn scenario_b_kind_filter_returns_only_that_kind() {
  let engine = fixture_engine();
  let results = engine
    .search(&SearchRequest::new("Manchester").for_kind(EntityKind::Team))
    .unwrap();

  let names: Vec<&str> = results.iter().map(|r| r.name.as_str()).collect();
  assert_eq!(results.len(), 2);
  assert!(names.contains(&"Manchester City"));
  assert!(names.contains(&"Manchester United"));
  assert!(results.iter().all(|r| r.entity_kind == EntityKind::Team));
}

#[test]
fn scenario_c_limit_one_matches_the_head_of_the_unlimited_call() {
  let engine = fixture_engine();
  let unlimited = engine.search(&SearchRequest::new("Haaland")).unwrap();
  let limited = engine
    .search(&SearchRequest::new("Haaland").limit(1))
    .unwrap();

  assert_eq!(limited.len(), 1);
  assert_eq!(limited[0], unlimited[0]);
}

#[test]
fn exact_name_match_outranks_popular_players() {
  let engine = fixture_engine();
  let results = engine
    .search(&SearchRequest::new("manchester city"))
    .unwrap();

  // Both players match via their subtitle and carry large popularity priors,
  // but the team's name equals the trimmed query.
  assert_eq!(results[0].name, "Manchester City");
  assert_eq!(results[0].entity_kind, EntityKind::Team);
}

#[test]
fn popularity_breaks_near_ties_between_lexical_equals() {
  let mut store = InMemDocumentStore::new();
  store.upsert(
    SearchDocument::new(EntityKind::Player, "p10", "alex-smith", "Alex Smith")
      .with_popularity(10.0),
  );
  store.upsert(
    SearchDocument::new(EntityKind::Player, "p11", "jordan-smith", "Jordan Smith")
      .with_popularity(90.0),
  );
  let engine = SearchEngine::new(Box::new(store));

  let results = engine.search(&SearchRequest::new("Smith")).unwrap();
  let names: Vec<&str> = results.iter().map(|r| r.name.as_str()).collect();
  assert_eq!(names, ["Jordan Smith", "Alex Smith"]);
}

#[test]
fn results_are_deterministic_across_calls() {
  let engine = fixture_engine();
  let request = SearchRequest::new("Manchester");

  let first = engine.search(&request).unwrap();
  let second = engine.search(&request).unwrap();
  assert_eq!(first, second);
}

#[test]
fn limit_bounds_the_result_count() {
  let engine = fixture_engine();
  let results = engine
    .search(&SearchRequest::new("Manchester").limit(2))
    .unwrap();
  assert!(results.len() <= 2);
}

#[test]
fn zero_limit_is_rejected() {
  let engine = fixture_engine();
  let error = engine
    .search(&SearchRequest::new("Haaland").limit(0))
    .unwrap_err();
  assert!(matches!(error, SearchError::InvalidLimit));
}

#[test]
fn empty_and_punctuation_only_queries_return_nothing() {
  let engine = fixture_engine();
  assert!(engine.search(&SearchRequest::new("")).unwrap().is_empty());
  assert!(engine.search(&SearchRequest::new("   ")).unwrap().is_empty());
  assert!(engine.search(&SearchRequest::new("!!!")).unwrap().is_empty());
}

#[test]
fn unmatched_query_returns_nothing() {
  let engine = fixture_engine();
  let results = engine
    .search(&SearchRequest::new("zzzqqqnonexistent000"))
    .unwrap();
  assert!(results.is_empty());
}

#[test]
fn fallback_finds_names_tokenization_breaks_apart() {
  let engine = fixture_engine();

  // "N'Golo" normalizes to ["n", "golo"], and no document word starts with
  // "golo", so the primary path comes back empty. The substring scan of the
  // raw query still finds the player.
  let results = engine.search(&SearchRequest::new("N'Golo")).unwrap();
  assert!(results.iter().any(|r| r.name == "N'Golo Kanté"));
}

#[test]
fn fallback_never_runs_when_a_filter_narrowed_real_matches_to_zero() {
  let mut store = fixture_store();
  // A team whose words do satisfy ["n", "golo"], so the unfiltered primary
  // result set is nonzero.
  store.upsert(SearchDocument::new(
    EntityKind::Team,
    "t9",
    "n-golo-city",
    "N Golo City",
  ));
  let engine = SearchEngine::new(Box::new(store));

  // Unfiltered: the primary path finds the team, so the player never
  // surfaces via the substring scan.
  let unfiltered = engine.search(&SearchRequest::new("N'Golo")).unwrap();
  assert!(unfiltered.iter().any(|r| r.name == "N Golo City"));
  assert!(unfiltered.iter().all(|r| r.name != "N'Golo Kanté"));

  // Filtered to players: the filter narrowed a nonzero primary set to zero,
  // which is a final empty result, not a fallback trigger.
  let filtered = engine
    .search(&SearchRequest::new("N'Golo").for_kind(EntityKind::Player))
    .unwrap();
  assert!(filtered.is_empty());
}

#[test]
fn fallback_respects_filter_and_limit() {
  let engine = fixture_engine();
  let results = engine
    .search(
      &SearchRequest::new("N'Golo")
        .for_kind(EntityKind::Player)
        .limit(1),
    )
    .unwrap();

  // No other document matches ["n", "golo"], so the fallback is allowed to
  // run here and the filter applies to it.
  assert_eq!(results.len(), 1);
  assert_eq!(results[0].entity_kind, EntityKind::Player);
}

struct UnreachableStore;

impl DocumentStore for UnreachableStore {
  fn query_ranked(
    &self,
    _query: &TokenQuery,
    _kind: Option<EntityKind>,
    _limit: usize,
  ) -> Result<Vec<RankedDocument>, StoreError> {
    Err(StoreError::Unreachable("connection refused".to_string()))
  }

  fn query_substring(
    &self,
    _raw_query: &str,
    _kind: Option<EntityKind>,
    _limit: usize,
  ) -> Result<Vec<SearchDocument>, StoreError> {
    Err(StoreError::Unreachable("connection refused".to_string()))
  }
}

#[test]
fn store_failures_propagate_instead_of_masquerading_as_empty() {
  let engine = SearchEngine::new(Box::new(UnreachableStore));
  let error = engine.search(&SearchRequest::new("Haaland")).unwrap_err();
  assert!(matches!(error, SearchError::StoreUnavailable(_)));
}
