/*!
# `WHILE <sensor>` ... `END`

## Purpose
Repeat a block as long as a sensor holds.

## Remarks
The sensor is checked before the first pass and again at `END`. When it is
false on entry the whole block is skipped.

A true check at `END` jumps back to the `WHILE` itself, which checks the
sensor once more before running the block again. Each pass therefore
reads the sensor twice, and the `WHILE` counts as a step on every pass.

*/
