use super::SortContext;

/// Adjacent-pair passes over the unsettled prefix; each pass settles its last slot.
pub(super) async fn bubble(ctx: &mut SortContext<'_>) {
    let n = ctx.len();
    for pass in 0..n {
        let end = n - pass - 1;
        for j in 0..end {
            ctx.compare(j, j + 1).await;
            if ctx.value(j) > ctx.value(j + 1) {
                ctx.report_swap(j, j + 1).await;
                ctx.exchange(j, j + 1);
            }
            ctx.refresh().await;
        }
        ctx.settle(end);
        ctx.refresh().await;
    }
}

pub(super) async fn selection(ctx: &mut SortContext<'_>) {
    let n = ctx.len();
    for i in 0..n {
        let mut min = i;
        for j in i + 1..n {
            ctx.compare(min, j).await;
            if ctx.value(j) < ctx.value(min) {
                min = j;
            }
        }
        if min != i {
            ctx.report_swap(i, min).await;
            ctx.exchange(i, min);
        }
        ctx.settle(i);
        ctx.refresh().await;
    }
}

/// Shifts larger prefix values right instead of swapping; the lifted key is
/// written once at its resting slot.
pub(super) async fn insertion(ctx: &mut SortContext<'_>) {
    let n = ctx.len();
    for i in 1..n {
        let key = ctx.value(i);
        let mut slot = i;
        while slot > 0 {
            ctx.compare(slot - 1, slot).await;
            let previous = ctx.value(slot - 1);
            if previous <= key {
                break;
            }
            ctx.set(slot, previous);
            slot -= 1;
            ctx.refresh().await;
        }
        ctx.set(slot, key);
        ctx.settle(slot);
        ctx.refresh().await;
    }
    // Prefix order is maintained incrementally, so earlier marks may point at
    // shifted slots; everything is final here.
    ctx.settle_all();
}
