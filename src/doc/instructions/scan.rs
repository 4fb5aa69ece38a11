/*!
# `SCAN` `COUNT`

## Purpose
Look around without moving. Extended set only.

## Remarks
`SCAN` records which of the four directions are clear along with what the
robot stands on. `COUNT` records how many keys, doors and exits lie in the
3x3 square around the robot. Both results are read after the run.

*/
