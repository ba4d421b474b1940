use super::SortContext;

/// Pending work for the top-down merge sort. Popping from a stack in this
/// order reproduces the recursive left, right, merge sequence.
enum MergeTask {
    Split { left: usize, right: usize },
    Merge { left: usize, mid: usize, right: usize },
}

pub(super) async fn merge(ctx: &mut SortContext<'_>) {
    let n = ctx.len();
    if n == 0 {
        return;
    }

    let mut pending = vec![MergeTask::Split {
        left: 0,
        right: n - 1,
    }];
    while let Some(task) = pending.pop() {
        match task {
            MergeTask::Split { left, right } => {
                if left >= right {
                    continue;
                }
                let mid = left + (right - left) / 2;
                pending.push(MergeTask::Merge { left, mid, right });
                pending.push(MergeTask::Split {
                    left: mid + 1,
                    right,
                });
                pending.push(MergeTask::Split { left, right: mid });
            }
            MergeTask::Merge { left, mid, right } => merge_runs(ctx, left, mid, right).await,
        }
    }
}

/// Merges `[left, mid]` and `[mid + 1, right]`, settling each written slot.
async fn merge_runs(ctx: &mut SortContext<'_>, left: usize, mid: usize, right: usize) {
    let lower = ctx.values()[left..=mid].to_vec();
    let upper = ctx.values()[mid + 1..=right].to_vec();
    let (mut a, mut b, mut k) = (0, 0, left);

    while a < lower.len() && b < upper.len() {
        ctx.compare(k, k).await;
        let next = if lower[a] <= upper[b] {
            a += 1;
            lower[a - 1]
        } else {
            b += 1;
            upper[b - 1]
        };
        ctx.set(k, next);
        ctx.settle(k);
        ctx.refresh().await;
        k += 1;
    }

    // At most one side still holds values; drain it without comparing.
    for &value in lower[a..].iter().chain(&upper[b..]) {
        ctx.set(k, value);
        ctx.settle(k);
        ctx.refresh().await;
        k += 1;
    }
}

/// Lomuto quick sort over half-open ranges, left partition first.
pub(super) async fn quick(ctx: &mut SortContext<'_>) {
    let mut pending = vec![(0, ctx.len())];
    while let Some((low, end)) = pending.pop() {
        match end.saturating_sub(low) {
            0 => {}
            1 => ctx.settle(low),
            _ => {
                let pivot = partition(ctx, low, end - 1).await;
                ctx.settle(pivot);
                pending.push((pivot + 1, end));
                pending.push((low, pivot));
            }
        }
    }
}

/// Partitions `[low, high]` around the value at `high`; returns its final slot.
async fn partition(ctx: &mut SortContext<'_>, low: usize, high: usize) -> usize {
    let pivot = ctx.value(high);
    let mut store = low;

    for j in low..high {
        ctx.compare(j, high).await;
        if ctx.value(j) < pivot {
            if store != j {
                ctx.exchange(store, j);
                ctx.report_swap(store, j).await;
                ctx.refresh().await;
            }
            store += 1;
        }
    }

    ctx.exchange(store, high);
    ctx.report_swap(store, high).await;
    ctx.refresh().await;
    store
}
