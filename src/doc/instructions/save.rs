/*!
# `SAVE` `LOAD`

## Purpose
Save and restore the robot. Extended set only.

## Remarks
`SAVE` records the robot, its world, the marks and the flag. `LOAD` puts
back the most recent save and forgets it. `LOAD` with nothing saved does
nothing.

*/
