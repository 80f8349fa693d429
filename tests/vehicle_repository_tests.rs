//! Tests de integración del repositorio sobre un archivo SQLite temporal

use rust_decimal::Decimal;
use tempfile::TempDir;
use vehicle_registry::{NewVehicle, VehicleRepository};

fn dec(value: &str) -> Decimal {
    value.parse().expect("decimal literal")
}

fn test_repository() -> (TempDir, VehicleRepository) {
    let dir = TempDir::new().expect("temp dir");
    let repository = VehicleRepository::new(dir.path().join("vehicles.db"));
    repository.initialize().expect("initialize");
    (dir, repository)
}

fn new_vehicle(make: &str, model: &str, build_year: i32, color: &str) -> NewVehicle {
    NewVehicle {
        make: make.to_string(),
        model: model.to_string(),
        build_year,
        power_hp: 110,
        odometer_km: 42_000,
        purchase_price: dec("18500.00"),
        color: color.to_string(),
    }
}

#[test]
fn test_create_and_find_all_round_trip() {
    let (_dir, repo) = test_repository();

    let input = new_vehicle("Volkswagen", "Golf", 2019, "Blau");
    let id = repo.create(&input).expect("create");
    assert!(id > 0);

    let all = repo.find_all().expect("find_all");
    assert_eq!(all.len(), 1);

    let stored = &all[0];
    assert_eq!(stored.id, id);
    assert_eq!(stored.make, input.make);
    assert_eq!(stored.model, input.model);
    assert_eq!(stored.build_year, input.build_year);
    assert_eq!(stored.power_hp, input.power_hp);
    assert_eq!(stored.odometer_km, input.odometer_km);
    assert_eq!(stored.purchase_price, input.purchase_price);
    assert_eq!(stored.color, input.color);
}

#[test]
fn test_find_all_on_empty_table_returns_empty_vec() {
    let (_dir, repo) = test_repository();
    assert!(repo.find_all().expect("find_all").is_empty());
    assert_eq!(repo.count().expect("count"), 0);
}

#[test]
fn test_find_all_orders_by_make_then_model() {
    let (_dir, repo) = test_repository();

    repo.create(&new_vehicle("Volkswagen", "Polo", 2018, "Rot")).expect("create");
    repo.create(&new_vehicle("Audi", "A4", 2020, "Schwarz")).expect("create");
    repo.create(&new_vehicle("Volkswagen", "Golf", 2019, "Blau")).expect("create");
    repo.create(&new_vehicle("BMW", "320i", 2021, "Weiss")).expect("create");

    let all = repo.find_all().expect("find_all");
    let names: Vec<(String, String)> =
        all.iter().map(|v| (v.make.clone(), v.model.clone())).collect();

    assert_eq!(
        names,
        vec![
            ("Audi".to_string(), "A4".to_string()),
            ("BMW".to_string(), "320i".to_string()),
            ("Volkswagen".to_string(), "Golf".to_string()),
            ("Volkswagen".to_string(), "Polo".to_string()),
        ]
    );
}

#[test]
fn test_ids_are_unique_and_increasing() {
    let (_dir, repo) = test_repository();

    let first = repo.create(&new_vehicle("Audi", "A4", 2020, "Rot")).expect("create");
    let second = repo.create(&new_vehicle("Audi", "A6", 2021, "Blau")).expect("create");
    assert!(second > first);
}

#[test]
fn test_initialize_is_idempotent() {
    let (_dir, repo) = test_repository();

    repo.create(&new_vehicle("Opel", "Corsa", 2015, "Gelb")).expect("create");
    repo.initialize().expect("second initialize");
    repo.initialize().expect("third initialize");

    assert_eq!(repo.count().expect("count"), 1);
    assert_eq!(repo.find_all().expect("find_all").len(), 1);
}

#[test]
fn test_search_empty_or_whitespace_term_equals_find_all() {
    let (_dir, repo) = test_repository();

    repo.create(&new_vehicle("Volkswagen", "Golf", 2019, "Blau")).expect("create");
    repo.create(&new_vehicle("Audi", "A4", 2020, "Rot")).expect("create");

    let all = repo.find_all().expect("find_all");
    assert_eq!(repo.search("").expect("search"), all);
    assert_eq!(repo.search("   ").expect("search"), all);
    assert_eq!(repo.search("\t\n").expect("search"), all);
}

#[test]
fn test_search_is_case_insensitive_substring_over_all_fields() {
    let (_dir, repo) = test_repository();

    repo.create(&new_vehicle("Volkswagen", "Golf", 2019, "Blau")).expect("create");
    repo.create(&new_vehicle("Audi", "A4", 2020, "Rot")).expect("create");
    repo.create(&new_vehicle("BMW", "320i", 1995, "Blaumetallic")).expect("create");

    // make, case-insensitive
    let by_make = repo.search("volks").expect("search");
    assert_eq!(by_make.len(), 1);
    assert_eq!(by_make[0].make, "Volkswagen");

    // model
    let by_model = repo.search("golf").expect("search");
    assert_eq!(by_model.len(), 1);

    // color como subcadena: "blau" aparece en "Blau" y "Blaumetallic"
    let by_color = repo.search("BLAU").expect("search");
    assert_eq!(by_color.len(), 2);

    // build_year como texto decimal
    let by_year = repo.search("199").expect("search");
    assert_eq!(by_year.len(), 1);
    assert_eq!(by_year[0].build_year, 1995);

    // sin coincidencias
    assert!(repo.search("Porsche").expect("search").is_empty());
}

#[test]
fn test_search_results_are_subset_of_find_all_with_same_order() {
    let (_dir, repo) = test_repository();

    repo.create(&new_vehicle("Volkswagen", "Polo", 2018, "Rot")).expect("create");
    repo.create(&new_vehicle("Volkswagen", "Golf", 2019, "Blau")).expect("create");
    repo.create(&new_vehicle("Audi", "A4", 2020, "Rot")).expect("create");

    let all = repo.find_all().expect("find_all");
    for term in ["Volkswagen", "Rot", "20", "a"] {
        let found = repo.search(term).expect("search");
        let mut all_iter = all.iter();
        for vehicle in &found {
            // cada resultado aparece en find_all() y en el mismo orden relativo
            assert!(all_iter.any(|candidate| candidate == vehicle));
        }
    }
}

#[test]
fn test_search_treats_like_wildcards_literally() {
    let (_dir, repo) = test_repository();

    repo.create(&new_vehicle("Custom", "GT 100%", 2010, "Grau")).expect("create");
    repo.create(&new_vehicle("Custom", "GT_Sport", 2011, "Grau")).expect("create");
    repo.create(&new_vehicle("Custom", "GTX", 2012, "Grau")).expect("create");

    // '%' literal: no debe comportarse como comodín y casar con todo
    let percent = repo.search("100%").expect("search");
    assert_eq!(percent.len(), 1);
    assert_eq!(percent[0].model, "GT 100%");

    // '_' literal: no debe casar con "GTX"
    let underscore = repo.search("T_S").expect("search");
    assert_eq!(underscore.len(), 1);
    assert_eq!(underscore[0].model, "GT_Sport");
}

#[test]
fn test_update_replaces_all_mutable_fields() {
    let (_dir, repo) = test_repository();

    let id = repo.create(&new_vehicle("Volkswagen", "Golf", 2019, "Blau")).expect("create");
    let mut stored = repo.find_all().expect("find_all").remove(0);
    let created_at = stored.created_at;

    stored.make = "VW".to_string();
    stored.model = "Golf GTI".to_string();
    stored.build_year = 2020;
    stored.power_hp = 245;
    stored.odometer_km = 60_000;
    stored.purchase_price = dec("31000.00");
    stored.color = "Schwarz".to_string();

    assert!(repo.update(&stored).expect("update"));

    let reloaded = repo.find_all().expect("find_all").remove(0);
    assert_eq!(reloaded.id, id);
    assert_eq!(reloaded.make, "VW");
    assert_eq!(reloaded.model, "Golf GTI");
    assert_eq!(reloaded.build_year, 2020);
    assert_eq!(reloaded.power_hp, 245);
    assert_eq!(reloaded.odometer_km, 60_000);
    assert_eq!(reloaded.purchase_price, dec("31000.00"));
    assert_eq!(reloaded.color, "Schwarz");
    // created_at refleja la inserción, nunca la actualización
    assert_eq!(reloaded.created_at, created_at);
}

#[test]
fn test_update_with_absent_id_returns_false_and_changes_nothing() {
    let (_dir, repo) = test_repository();

    repo.create(&new_vehicle("Audi", "A4", 2020, "Rot")).expect("create");
    let before = repo.find_all().expect("find_all");

    let mut ghost = before[0].clone();
    ghost.id = 9999;
    ghost.make = "Phantom".to_string();

    assert!(!repo.update(&ghost).expect("update"));
    assert_eq!(repo.find_all().expect("find_all"), before);
}

#[test]
fn test_delete_removes_row_and_reports_absent_id() {
    let (_dir, repo) = test_repository();

    let id = repo.create(&new_vehicle("Audi", "A4", 2020, "Rot")).expect("create");
    assert_eq!(repo.count().expect("count"), 1);

    assert!(repo.delete(id).expect("delete"));
    assert_eq!(repo.count().expect("count"), 0);

    assert!(!repo.delete(id).expect("second delete"));
    assert!(!repo.delete(123_456).expect("absent delete"));
}

#[test]
fn test_count_tracks_inserts_and_deletes() {
    let (_dir, repo) = test_repository();

    assert_eq!(repo.count().expect("count"), 0);
    let first = repo.create(&new_vehicle("Audi", "A4", 2020, "Rot")).expect("create");
    repo.create(&new_vehicle("BMW", "116i", 2017, "Weiss")).expect("create");
    assert_eq!(repo.count().expect("count"), 2);

    repo.delete(first).expect("delete");
    assert_eq!(repo.count().expect("count"), 1);
}

#[test]
fn test_store_remains_usable_after_failed_operation() {
    let dir = TempDir::new().expect("temp dir");
    let missing_parent = dir.path().join("no_such_dir").join("vehicles.db");
    let broken = VehicleRepository::new(&missing_parent);

    // El directorio padre no existe: la inicialización falla
    assert!(broken.initialize().is_err());

    // Un repositorio válido sigue funcionando de forma independiente
    let repository = VehicleRepository::new(dir.path().join("vehicles.db"));
    repository.initialize().expect("initialize");
    repository
        .create(&new_vehicle("Audi", "A4", 2020, "Rot"))
        .expect("create");
    assert_eq!(repository.count().expect("count"), 1);
}

#[test]
fn test_reopen_preserves_data() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("vehicles.db");

    {
        let repository = VehicleRepository::new(&path);
        repository.initialize().expect("initialize");
        repository
            .create(&new_vehicle("Mercedes", "C200", 2016, "Silber"))
            .expect("create");
    }

    let reopened = VehicleRepository::new(&path);
    reopened.initialize().expect("re-initialize");
    let all = reopened.find_all().expect("find_all");
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].make, "Mercedes");
}
