/*!
# `OPEN`

## Purpose
Open the door under the robot.

## Remarks
Needs a key, which is kept afterward. Does nothing elsewhere. The robot
escapes through an opened door the next time it steps onto it.

*/
