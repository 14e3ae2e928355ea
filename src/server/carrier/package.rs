/// One order line annotated with the physical data the carrier needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageItem {
    pub shop_id: i32,
    pub variant_id: i32,
    pub quantity: i32,
    pub weight_grams: i32,
    pub length_mm: i32,
    pub width_mm: i32,
    pub height_mm: i32,
}

/// Per-shop parcel: aggregate weight and bounding dimensions over the
/// shop's lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Package {
    pub shop_id: i32,
    pub weight_grams: i32,
    pub length_mm: i32,
    pub width_mm: i32,
    pub height_mm: i32,
    pub items: Vec<PackageItem>,
}

/// Groups order lines into one package per shop.
///
/// Single pass keyed by shop id; weight is summed (per line: item weight x
/// quantity), dimensions take the maximum over the shop's items. Packages
/// come out in first-seen shop order and lines keep their input order
/// within a package.
pub fn build_packages(items: &[PackageItem]) -> Vec<Package> {
    let mut packages: Vec<Package> = Vec::new();

    for item in items {
        let package = match packages.iter_mut().find(|p| p.shop_id == item.shop_id) {
            Some(package) => package,
            None => {
                packages.push(Package {
                    shop_id: item.shop_id,
                    weight_grams: 0,
                    length_mm: 0,
                    width_mm: 0,
                    height_mm: 0,
                    items: Vec::new(),
                });
                packages.last_mut().expect("just pushed")
            }
        };

        package.weight_grams += item.weight_grams * item.quantity;
        package.length_mm = package.length_mm.max(item.length_mm);
        package.width_mm = package.width_mm.max(item.width_mm);
        package.height_mm = package.height_mm.max(item.height_mm);
        package.items.push(item.clone());
    }

    packages
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(shop_id: i32, variant_id: i32, qty: i32, weight: i32, dims: (i32, i32, i32)) -> PackageItem {
        PackageItem {
            shop_id,
            variant_id,
            quantity: qty,
            weight_grams: weight,
            length_mm: dims.0,
            width_mm: dims.1,
            height_mm: dims.2,
        }
    }

    #[test]
    fn groups_by_shop_preserving_first_seen_order() {
        let items = vec![
            item(7, 1, 1, 100, (10, 10, 10)),
            item(3, 2, 1, 200, (20, 20, 20)),
            item(7, 3, 1, 300, (30, 5, 5)),
        ];

        let packages = build_packages(&items);

        assert_eq!(packages.len(), 2);
        assert_eq!(packages[0].shop_id, 7);
        assert_eq!(packages[1].shop_id, 3);
        assert_eq!(packages[0].items.len(), 2);
        assert_eq!(packages[0].items[0].variant_id, 1);
        assert_eq!(packages[0].items[1].variant_id, 3);
    }

    #[test]
    fn sums_weight_by_quantity_and_maxes_dimensions() {
        let items = vec![
            item(1, 10, 2, 150, (300, 200, 120)),
            item(1, 11, 1, 400, (250, 280, 90)),
        ];

        let packages = build_packages(&items);

        assert_eq!(packages.len(), 1);
        assert_eq!(packages[0].weight_grams, 2 * 150 + 400);
        assert_eq!(packages[0].length_mm, 300);
        assert_eq!(packages[0].width_mm, 280);
        assert_eq!(packages[0].height_mm, 120);
    }

    #[test]
    fn single_shop_yields_single_package() {
        let items = vec![item(5, 1, 1, 100, (10, 10, 10)), item(5, 2, 3, 50, (5, 5, 5))];

        let packages = build_packages(&items);

        assert_eq!(packages.len(), 1);
        assert_eq!(packages[0].shop_id, 5);
        assert_eq!(packages[0].weight_grams, 100 + 150);
    }

    #[test]
    fn empty_input_builds_no_packages() {
        assert!(build_packages(&[]).is_empty());
    }
}
