use std::sync::Arc;

use talent_insights::analytics::{
    job_family_table, overall_pass_rate, role_table, scale, vendor_table, InterviewsPerPlacement,
    JobFamilyId, JobFamilyRecord, PricingTier, RoleRecord, SortDirection, SortState,
    TableViewState, TimePeriod, VendorColumn, VendorId, VendorRecord, VendorStatus,
};
use talent_insights::dataset::{Dataset, VendorCsvImporter};

fn vendor(id: &str, name: &str, volume: u32, pass_total: u32, placements: u32) -> VendorRecord {
    VendorRecord {
        id: VendorId(id.to_string()),
        name: name.to_string(),
        status: VendorStatus::Active,
        volume,
        pass_rate: 100.0 * f64::from(pass_total) / f64::from(volume.max(1)),
        pass_total,
        avg_time_in_process: 4.0,
        no_show_rate: 5.0,
        no_show_total: volume / 20,
        integrity_flag_rate: 2.0,
        integrity_total: volume / 50,
        placements,
        placements_total: placements + 5,
        regions: ["North America".to_string()].into_iter().collect(),
        cost_per_hire: 3000,
        cost_per_interview: 150,
        pricing_tier: PricingTier::Standard,
    }
}

fn role(id: &str, name: &str, family: &str, vendors: &[&Arc<VendorRecord>]) -> RoleRecord {
    RoleRecord {
        id: id.to_string(),
        name: name.to_string(),
        location: "Remote".to_string(),
        job_family_id: JobFamilyId(family.to_string()),
        vendors: vendors.iter().map(|vendor| Arc::clone(vendor)).collect(),
    }
}

#[test]
fn weighted_pass_rate_across_vendors() {
    let vendors = vec![
        vendor("v1", "V1", 100, 40, 10),
        vendor("v2", "V2", 50, 10, 5),
    ];
    assert_eq!(overall_pass_rate(&vendors), 33);
}

#[test]
fn quarter_view_scales_counts_and_keeps_rates() {
    let base = vendor("v1", "V1", 100, 40, 10);
    let scaled = scale(&base, TimePeriod::Days90);

    assert_eq!(scaled.volume, 250);
    assert_eq!(scaled.placements, 25);
    assert_eq!(scaled.pass_rate, 40.0);
    assert_eq!(
        scaled.interviews_per_placement(),
        InterviewsPerPlacement::Finite(10.0)
    );
}

#[test]
fn role_search_by_vendor_keeps_only_that_vendor() {
    let acme = Arc::new(vendor("v1", "Acme Staffing", 100, 40, 10));
    let bright = Arc::new(vendor("v2", "BrightHire", 80, 30, 8));
    let roles = vec![role("r1", "Backend Engineer", "eng", &[&acme, &bright])];

    let table = role_table(&roles, &TableViewState::default().with_search("acme"));
    assert_eq!(table.rows.len(), 1);
    let names: Vec<_> = table.rows[0]
        .vendors
        .iter()
        .map(|vendor| vendor.name.as_str())
        .collect();
    assert_eq!(names, vec!["Acme Staffing"]);

    let table = role_table(&roles, &TableViewState::default().with_search("backend"));
    assert_eq!(table.rows[0].vendors.len(), 2);
}

#[test]
fn family_rollup_counts_shared_vendor_once() {
    let shared = Arc::new(vendor("v1", "Acme Staffing", 100, 40, 10));
    let other = Arc::new(vendor("v2", "BrightHire", 80, 30, 8));
    let roles = vec![
        role("r1", "Backend Engineer", "eng", &[&shared]),
        role("r2", "Frontend Engineer", "eng", &[&shared, &other]),
    ];
    let families = vec![JobFamilyRecord {
        id: JobFamilyId("eng".to_string()),
        name: "Engineering".to_string(),
        description: "Product engineering".to_string(),
    }];

    let table = job_family_table(&families, &roles, &TableViewState::default());
    assert_eq!(table.rows.len(), 1);
    assert_eq!(table.rows[0].vendors.len(), 2);
    assert_eq!(table.rows[0].role_names.len(), 2);
    assert_eq!(table.summary.total_volume, 180);
}

#[test]
fn unknown_role_name_leaves_vendor_table_unfiltered() {
    let dataset = Dataset::seed();
    let all = dataset.vendor_table(&TableViewState::default());
    let unknown = dataset.vendor_table(&TableViewState::default().with_role("Astronaut"));
    assert_eq!(all.rows, unknown.rows);
}

#[test]
fn role_filter_limits_vendor_table_to_role_vendors() {
    let dataset = Dataset::seed();
    let table = vendor_table(
        &dataset.vendors,
        &dataset.roles,
        &TableViewState::default().with_role("Data Scientist"),
    );
    let names: Vec<_> = table.rows.iter().map(|row| row.name.as_str()).collect();
    assert_eq!(names, vec!["CodeHire Partners", "NextGen Talent"]);
    assert_eq!(table.rows[1].interviews_per_placement_label, "n/a");
}

#[test]
fn unknown_job_family_matches_nothing() {
    let dataset = Dataset::seed();
    let table =
        dataset.job_family_table(&TableViewState::default().with_job_family("Astronautics"));
    assert!(table.rows.is_empty());
    assert_eq!(table.summary.vendor_count, 0);
}

#[test]
fn year_view_of_seed_sorts_descending_by_placements() {
    let dataset = Dataset::seed();
    let state = TableViewState::for_period(TimePeriod::Year1)
        .with_sort_click(VendorColumn::Placements)
        .with_sort_click(VendorColumn::Placements);
    assert_eq!(
        state.sort,
        SortState::Sorted {
            column: VendorColumn::Placements,
            direction: SortDirection::Descending
        }
    );

    let table = dataset.vendor_table(&state);
    let placements: Vec<u32> = table.rows.iter().map(|row| row.placements).collect();
    assert_eq!(placements, vec![96, 72, 64, 24, 0]);
    assert_eq!(table.period_label, "Last year");
}

#[test]
fn imported_vendors_replace_seed_and_rebind_roles() {
    let data = include_bytes!("../fixtures/vendor_export.csv");
    let vendors = VendorCsvImporter::from_reader(&data[..]).expect("export imports");
    assert_eq!(vendors.len(), 4);

    let dataset = Dataset::seed().with_vendors(vendors);
    assert_eq!(dataset.vendors.len(), 4);

    let frontend = dataset
        .roles
        .iter()
        .find(|role| role.name == "Frontend Engineer")
        .expect("role present");
    let names: Vec<_> = frontend
        .vendors
        .iter()
        .map(|vendor| vendor.name.as_str())
        .collect();
    assert_eq!(names, vec!["TechTalent Solutions"]);
    assert_eq!(frontend.vendors[0].volume, 140);

    let summit = dataset
        .vendors
        .iter()
        .find(|vendor| vendor.id.0 == "vendor-006")
        .expect("summit imported");
    assert_eq!(summit.pass_total, 0);
    assert!(summit.regions.is_empty());
    assert_eq!(
        summit.interviews_per_placement(),
        InterviewsPerPlacement::Undefined
    );
}
