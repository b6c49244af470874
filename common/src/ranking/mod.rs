//! Bid ranking for the ad board.
//!
//! An ad's score is its bid price boosted by its popularity:
//! `price + price * clicks * 0.42`. Ads are displayed by descending score. The
//! sort is stable, so ads with equal scores keep their stored order.

use crate::model::ad::Ad;
use std::cmp::Ordering;

/// Weight of one click relative to the bid price.
pub const CLICK_WEIGHT: f64 = 0.42;

/// Computes the ranking score of an ad.
///
/// A zero bid always scores zero, whatever the click count.
pub fn score(ad: &Ad) -> f64 {
    ad.price + ad.price * ad.clicks as f64 * CLICK_WEIGHT
}

/// Returns a copy of `ads` ordered by descending score. The input is left untouched.
pub fn rank(ads: &[Ad]) -> Vec<Ad> {
    let mut ranked = ads.to_vec();
    sort_by_score(&mut ranked);
    ranked
}

/// Sorts `ads` in place by descending score, keeping the relative order of ties.
pub fn sort_by_score(ads: &mut [Ad]) {
    ads.sort_by(|a, b| score(b).partial_cmp(&score(a)).unwrap_or(Ordering::Equal));
}
