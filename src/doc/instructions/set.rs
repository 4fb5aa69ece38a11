/*!
# `SET` `CLR`

## Purpose
Set or clear the flag.

## Remarks
The flag starts clear on every run. No instruction reads it; it is kept
for tools inspecting a finished run.

*/
