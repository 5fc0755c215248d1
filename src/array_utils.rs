/// Picks the source and destination buffers of stage `stage` out of `total_stages`.
///
/// Stage 0 reads `input`. Every later stage reads whatever the previous stage wrote. Destinations alternate between
/// `output` and `scratch`, arranged so that the final stage always writes `output`.
#[inline(always)]
pub fn stage_buffers<'a, T>(
    stage: usize,
    total_stages: usize,
    input: &'a [T],
    output: &'a mut [T],
    scratch: &'a mut [T],
) -> (&'a [T], &'a mut [T]) {
    debug_assert!(stage < total_stages);
    let writes_output = (total_stages - 1 - stage) % 2 == 0;
    match (stage, writes_output) {
        (0, true) => (input, output),
        (0, false) => (input, scratch),
        (_, true) => (&*scratch, output),
        (_, false) => (&*output, scratch),
    }
}
